use crate::contents_json::{build_contents_json, write_contents_json, ContentsFile};
use crate::error::Result;
use crate::icon_spec::ICON_SPECS;
use crate::renderer::{
    find_renderer, render_svg_to_png, validate_background, Renderer, RendererKind,
};
use log::debug;
use std::{
    collections::HashSet,
    fs::create_dir_all,
    path::{Path, PathBuf},
};

/// Everything one generation run needs
#[derive(Debug)]
pub struct GenerateOptions {
    pub svg_path: PathBuf,
    pub appiconset_dir: PathBuf,
    pub renderer: Option<RendererKind>,
    pub background: String,
}

/// Renders every variant in [`ICON_SPECS`] and writes Contents.json
///
/// Stops at the first failure. Files written before that point are left in
/// place and Contents.json is not written.
pub fn generate_icons(options: &GenerateOptions) -> Result<ContentsFile> {
    let renderer = find_renderer(options.renderer)?;
    validate_background(&options.background)?;

    generate_icons_with(
        &renderer,
        &options.svg_path,
        &options.appiconset_dir,
        &options.background,
    )
}

/// [`generate_icons`] with an already located renderer
pub fn generate_icons_with(
    renderer: &Renderer,
    svg_path: &Path,
    appiconset_dir: &Path,
    background: &str,
) -> Result<ContentsFile> {
    create_dir_all(appiconset_dir)?;

    println!(
        "Generating {} with {}...",
        appiconset_dir.display(),
        renderer.kind.program()
    );

    let mut generated_filenames = Vec::with_capacity(ICON_SPECS.len());
    let mut written = HashSet::new();

    for spec in &ICON_SPECS {
        let size_px = spec.pixel_size();
        let filename = spec.filename();

        // Several specs share a pixel size; the later render replaces the file
        if !written.insert(size_px) {
            debug!("{filename} already written this run, overwriting");
        }

        render_svg_to_png(
            renderer,
            svg_path,
            size_px,
            &appiconset_dir.join(&filename),
            background,
        )?;
        println!(
            "  ✓ Generated {filename} ({} {} @{})",
            spec.idiom,
            spec.size_string(),
            spec.scale_string()
        );

        generated_filenames.push(filename);
    }

    let contents = build_contents_json(&ICON_SPECS, &generated_filenames)?;
    write_contents_json(appiconset_dir, &contents)?;
    println!("  ✓ Generated Contents.json");

    Ok(contents)
}
