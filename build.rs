use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=assets/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("splash_frames.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let asset_dir = Path::new("assets").join("splash");
    if !asset_dir.exists() {
        writeln!(f, "pub const SPLASH_FRAMES: &[&str] = &[];").unwrap();
        writeln!(f, "pub const SPLASH_WIDTH: u16 = 0;").unwrap();
        return;
    }

    let mut entries: Vec<_> = fs::read_dir(&asset_dir)
        .unwrap()
        .map(|res| res.unwrap().path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
        .collect();

    // Frames play in file name order: 01.txt, 02.txt, ...
    entries.sort();

    writeln!(f, "pub const SPLASH_FRAMES: &[&str] = &[").unwrap();
    for path in entries {
        let content = fs::read_to_string(&path).unwrap();
        // Trailing blank lines would shift the figure off-centre.
        let trimmed = content.trim_end_matches(['\n', '\r']);
        writeln!(f, "    {:?},", trimmed).unwrap();
    }
    writeln!(f, "];").unwrap();

    // Widest line across all frames, used to centre the figure.
    let max_width = fs::read_dir(&asset_dir)
        .unwrap()
        .filter_map(|res| fs::read_to_string(res.unwrap().path()).ok())
        .flat_map(|content| content.lines().map(|l| l.chars().count()).collect::<Vec<_>>())
        .max()
        .unwrap_or(0);
    writeln!(f, "pub const SPLASH_WIDTH: u16 = {};", max_width).unwrap();
}
