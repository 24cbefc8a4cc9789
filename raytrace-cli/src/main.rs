mod demo;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use env_logger::Env;
use image::RgbaImage;
use path_absolutize::Absolutize;

use demo::Demo;
use raytrace_core::renderer::DEFAULT_MAX_REFLECTIONS;
use raytrace_core::Renderer;

/// The default path when saving images.
const DEFAULT_FILE_NAME: &str = "./raytraced.png";

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Which hardcoded demo scene to render.
    #[arg(long, value_enum, default_value_t = DemoArg::Ambient)]
    demo: DemoArg,
    #[arg(long, default_value_t = 512)]
    width: u32,
    #[arg(long, default_value_t = 512)]
    height: u32,
    #[arg(short, long)]
    out_file: Option<String>,
    /// Mirror-reflection bounces per pixel. Defaults to the renderer's
    /// own default depth.
    #[arg(short, long)]
    recurse_depth: Option<u32>,
    #[arg(short, long)]
    parallel: bool,
    #[arg(short, long, default_value_t = 8)]
    num_threads: usize,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum DemoArg {
    Ambient,
    Directed,
    Mirror,
}

impl From<DemoArg> for Demo {
    fn from(value: DemoArg) -> Self {
        match value {
            DemoArg::Ambient => Demo::Ambient,
            DemoArg::Directed => Demo::Directed,
            DemoArg::Mirror => Demo::Mirror,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(args) {
        Ok(message) => println!("{message}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<String, String> {
    let scene = Demo::from(args.demo).build();
    let (width, height) = (args.width as usize, args.height as usize);
    let mut buffer = vec![0u8; width * height * 4];
    let max_reflections = args.recurse_depth.unwrap_or(DEFAULT_MAX_REFLECTIONS);

    if args.parallel {
        Renderer::render_into_parallel(
            Arc::new(scene),
            &mut buffer,
            width,
            height,
            args.num_threads,
            max_reflections,
        );
    } else {
        Renderer::render_into(&scene, &mut buffer, width, height, max_reflections);
    }

    let mut img = RgbaImage::new(width as u32, height as u32);
    img.as_flat_samples_mut().samples.copy_from_slice(&buffer);

    let out_file = if let Some(f) = args.out_file {
        Path::new(&f).absolutize().map_err(|e| e.to_string())?.to_path_buf()
    } else {
        find_unique_file_name()?
    };

    create_empty_file(&out_file)?;

    match img.save(&out_file) {
        Ok(_) => Ok(format!("Saved image to {}", out_file.to_string_lossy())),
        Err(e) => Err(format!("Could not save image!\n{e}")),
    }
}

fn create_empty_file<S: AsRef<Path>>(file: S) -> Result<(), String> {
    let file = if file.as_ref().is_absolute() {
        file.as_ref().to_path_buf()
    } else {
        let dir = std::env::current_dir().map_err(|_| {
            format!(
                "Could not save image to '{}'\nTry using an absolute path instead.",
                file.as_ref().to_string_lossy()
            )
        })?;
        Path::new(&dir).join(file)
    };

    if let Err(err) = std::fs::File::create(file) {
        Err(format!("Could not create output file!\n{err}"))
    } else {
        Ok(())
    }
}

fn find_unique_file_name() -> Result<PathBuf, String> {
    let mut name: String = PathBuf::from(DEFAULT_FILE_NAME)
        .absolutize()
        .map_err(|e| e.to_string())?
        .to_string_lossy()
        .to_string();

    let suffix_at = name.len() - 4;
    let mut i = 0;
    while let Ok(true) = Path::new(&name).try_exists() {
        i += 1;
        name.truncate(suffix_at);
        name += &format!("-{i}.png");

        if i > 1000 {
            return Err(
                "Could not find a unique name for the file.\nConsider using --out-file and try again."
                    .to_string(),
            );
        }
    }
    Ok(name.into())
}
