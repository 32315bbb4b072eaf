use anyhow::Result;
use clap::Args;
use memegen_core::geometry::fit_content;

#[derive(Args)]
pub struct FitArgs {
    /// Canvas width in pixels
    pub container_width: f64,
    /// Canvas height in pixels
    pub container_height: f64,
    /// Image width in pixels
    pub content_width: f64,
    /// Image height in pixels
    pub content_height: f64,
}

pub fn run(args: &FitArgs) -> Result<()> {
    let rect = fit_content(
        args.container_width,
        args.container_height,
        args.content_width,
        args.content_height,
    )?;

    println!("Width:     {}", rect.width);
    println!("Height:    {}", rect.height);
    println!("Offset X:  {}", rect.offset_x);
    println!("Offset Y:  {}", rect.offset_y);

    Ok(())
}
