//! Descriptor construction command implementation.
use log::*;
use tokio::fs;

use crate::{
    cli, config,
    descriptor::DescriptorBuilder,
    error::Result,
    file_loader::LocalFiles,
};

/// Execute build command to construct the installer descriptor and emit
/// the rendered JSON to stdout or a file.
pub async fn execute(args: &cli::Args, output: Option<&str>) -> Result<()> {
    let loader = LocalFiles::new(&args.root);

    let manifest = config::load_config(&loader, &args.config).await?;

    info!("building descriptor for {}", manifest.name);

    let descriptor = DescriptorBuilder::new().build(&manifest, &loader).await?;

    let rendered = descriptor.render()?;

    match output {
        Some(path) => {
            fs::write(path, &rendered).await?;
            info!("wrote descriptor for {} to {}", descriptor.name, path);
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
