#![cfg(unix)]

use std::collections::BTreeSet;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const MINIMAL_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1024" height="1024" viewBox="0 0 1024 1024">
  <circle cx="512" cy="512" r="400" fill="#e8a33d"/>
</svg>
"##;

/// Records its argv into whatever output file it was asked to write
const RECORDING_RENDERER: &str = r#"#!/bin/sh
out=""
prev=""
for arg in "$@"; do
  case "$arg" in
    --export-filename=*) out="${arg#--export-filename=}" ;;
  esac
  if [ "$prev" = "-o" ]; then
    out="$arg"
  fi
  prev="$arg"
done
echo "$@" > "$out"
"#;

/// A project root with Design/AppIcon.svg and an empty bin/ for fake renderers
struct Project {
    root: TempDir,
}

impl Project {
    fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir_all(root.path().join("Design")).unwrap();
        std::fs::create_dir_all(root.path().join("bin")).unwrap();
        std::fs::write(root.path().join("Design/AppIcon.svg"), MINIMAL_SVG).unwrap();
        Self { root }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    fn appiconset_dir(&self) -> PathBuf {
        self.path().join("Assets.xcassets/AppIcon.appiconset")
    }

    fn install_renderer(&self, name: &str, body: &str) {
        let path = self.path().join("bin").join(name);
        std::fs::write(&path, body).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Runs the binary with only bin/ on the search path
    fn run(&self, extra_args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_appiconset-gen"))
            .arg("--project-root")
            .arg(self.path())
            .args(extra_args)
            .env("PATH", self.path().join("bin"))
            .output()
            .expect("Failed to run appiconset-gen")
    }
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("appiconset-gen failed with status: {}", output.status);
    }
}

fn read_contents_json(dir: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(dir.join("Contents.json")).expect("Contents.json missing");
    serde_json::from_str(&text).expect("Contents.json should contain valid JSON")
}

fn png_files(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".png"))
        .collect()
}

#[test]
fn test_default_paths_produce_complete_appiconset() {
    let project = Project::new();
    project.install_renderer("rsvg-convert", RECORDING_RENDERER);

    let output = project.run(&[]);
    assert_success(&output);

    let dir = project.appiconset_dir();
    let contents = read_contents_json(&dir);
    let images = contents["images"].as_array().unwrap();
    assert_eq!(images.len(), 18);

    assert_eq!(contents["info"]["version"], 1);
    assert_eq!(contents["info"]["author"], "xcode");

    // Every referenced file exists and nothing else was rendered
    let referenced: BTreeSet<String> = images
        .iter()
        .map(|image| image["filename"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(referenced, png_files(&dir));

    for (i, image) in images.iter().enumerate() {
        for key in ["idiom", "size", "scale", "filename"] {
            assert!(image[key].is_string(), "Image entry {i} should have {key}");
        }
    }

    assert_eq!(images[16]["idiom"], "ipad");
    assert_eq!(images[16]["size"], "83.5x83.5");
    assert_eq!(images[16]["scale"], "2x");
    assert_eq!(images[16]["filename"], "icon_167x167.png");
    assert_eq!(images[17]["idiom"], "ios-marketing");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Generated Contents.json"), "{stdout}");
}

#[test]
fn test_inkscape_fallback_with_explicit_paths() {
    let project = Project::new();
    project.install_renderer("inkscape", RECORDING_RENDERER);
    let out_dir = project.path().join("custom/out");

    let output = project.run(&[
        "--input",
        project.path().join("Design/AppIcon.svg").to_str().unwrap(),
        "--output",
        out_dir.to_str().unwrap(),
    ]);
    assert_success(&output);

    let recorded = std::fs::read_to_string(out_dir.join("icon_152x152.png")).unwrap();
    assert!(recorded.contains("--export-width=152"), "{recorded}");
    assert!(recorded.contains("--export-background-opacity=1.0"), "{recorded}");
    assert_eq!(read_contents_json(&out_dir)["images"].as_array().unwrap().len(), 18);
}

#[test]
fn test_missing_renderer_fails_without_output() {
    let project = Project::new();

    let output = project.run(&[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rsvg-convert"), "{stderr}");
    assert!(stderr.contains("inkscape"), "{stderr}");
    assert!(!project.appiconset_dir().exists());
}

#[test]
fn test_renderer_failure_leaves_no_manifest() {
    let project = Project::new();
    project.install_renderer("rsvg-convert", "#!/bin/sh\nexit 2\n");

    let output = project.run(&[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rendering 40x40"), "{stderr}");
    assert!(!project.appiconset_dir().join("Contents.json").exists());
}

#[test]
fn test_rerun_overwrites_existing_appiconset() {
    let project = Project::new();
    project.install_renderer("rsvg-convert", RECORDING_RENDERER);
    let dir = project.appiconset_dir();

    assert_success(&project.run(&[]));
    std::fs::write(dir.join("Contents.json"), "stale").unwrap();
    std::fs::write(dir.join("icon_40x40.png"), "stale").unwrap();

    assert_success(&project.run(&["--background", "#112233"]));

    assert_eq!(read_contents_json(&dir)["images"].as_array().unwrap().len(), 18);
    let recorded = std::fs::read_to_string(dir.join("icon_40x40.png")).unwrap();
    assert!(recorded.contains("--background-color=#112233"), "{recorded}");
}

#[test]
fn test_invalid_background_is_rejected() {
    let project = Project::new();
    project.install_renderer("rsvg-convert", RECORDING_RENDERER);

    let output = project.run(&["--background", "definitely-not-a-color"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid background color"), "{stderr}");
}

#[test]
fn test_translucent_background_is_rejected_before_rendering() {
    let project = Project::new();
    project.install_renderer("rsvg-convert", RECORDING_RENDERER);

    for color in ["transparent", "#ffffff00"] {
        let output = project.run(&["--background", color]);
        assert!(!output.status.success(), "{color} should be rejected");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid background color"), "{stderr}");
        assert!(!project.appiconset_dir().exists());
    }
}
