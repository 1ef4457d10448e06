use std::fs;
use std::path::Path;

fn validate_shader(path: &Path) {
    let src = fs::read_to_string(path).expect("read shader");
    let module = naga::front::wgsl::parse_str(&src).expect("wgsl parse");
    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator.validate(&module).expect("wgsl validate");
}

#[test]
fn compile_terrain_shader() {
    let shader = Path::new("src/terrain.wgsl");
    validate_shader(shader);
}

#[test]
fn terrain_shader_matches_evaluator_constants() {
    // The WGSL port carries its own copies of the tuning constants; make sure
    // they stay in sync with the CPU defaults.
    let src = fs::read_to_string("src/terrain.wgsl").expect("read shader");
    let terrain = terrain::TerrainParams::default();
    let march = terrain::MarchParams::default();
    for needle in [
        format!("const OCTAVES: u32 = {}u;", terrain.octaves),
        format!("const TERRAIN_SCALE: f32 = {};", terrain.scale),
        format!("const TERRAIN_HEIGHT: f32 = {:.1};", terrain.height),
        format!("const WATER_HEIGHT: f32 = {};", terrain.water_height),
        format!("const MAX_ITERATIONS: u32 = {}u;", march.max_iterations),
        format!("const MAX_DISTANCE: f32 = {:.1};", march.max_distance),
        format!("const HIT_THRESHOLD: f32 = {};", march.hit_threshold),
    ] {
        assert!(src.contains(&needle), "shader drifted: missing `{needle}`");
    }
}
