use clap::Parser;
use lsjson_site::{archive, config, generate, manifest, output, tree};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lsjson-site")]
#[command(about = "Static directory-browser site generator for rclone remotes")]
#[command(long_about = "\
Static directory-browser site generator for rclone remotes

The manifest is the data source. Produce it with rclone, generate the site,
then publish the result wherever static files are served:

  rclone lsjson -R remote:bucket > files.json
  lsjson-site
  rclone copy static_site remote:bucket/site

Each directory in the manifest becomes one self-contained index.html with a
search box and sortable name/size columns. File links point at the serving
base URL (an 'rclone serve' endpoint or any HTTP gateway in front of the
remote), so the site carries no file bytes itself. The output directory is
also packed into an adjacent zip for single-artifact deployment.")]
#[command(version)]
struct Cli {
    /// Manifest file produced by `rclone lsjson -R`
    #[arg(long, default_value = config::DEFAULT_MANIFEST_FILE)]
    manifest: PathBuf,

    /// Directory the generated site is written into
    #[arg(long, default_value = config::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Base URL that file links point at
    #[arg(long, default_value = config::DEFAULT_SERVE_URL)]
    base_url: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::SiteConfig {
        manifest_path: cli.manifest,
        output_dir: cli.output,
        base_url: cli.base_url,
    };

    println!("Starting themed site generation...");

    // A missing or malformed manifest is an expected operator mistake, not a
    // crash: point at the rclone command and exit cleanly.
    let entries = match manifest::load(&config.manifest_path) {
        Ok(entries) => entries,
        Err(_) => {
            println!("{}", output::manifest_error_line(&config.manifest_path));
            return Ok(());
        }
    };

    let tree = tree::group_by_parent(entries);
    output::print_generate_output(&tree);
    generate::generate(&tree, &config.output_dir, &config.base_url)?;
    println!(
        "\n\u{2705} Site generation complete in the '{}' directory.",
        config.output_dir.display()
    );

    println!("Zipping the output directory...");
    let zip_path = archive::archive(&config.output_dir)?;
    println!(
        "\u{2705} Successfully created zip file: {}",
        zip_path.display()
    );

    Ok(())
}
