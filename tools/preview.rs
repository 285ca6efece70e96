//! Preview — renders a generated maze as an ASCII wall map for eyeballing.
//!
//! Usage: preview [--width <n>] [--height <n>] [--prefix <s>] [--icon <s>]
//!                [--color <s>] [--seed <n>] [--dump]
//!
//! `--dump` additionally prints the entity set as pretty RON.

use orbis_content::core::maze::{MazeBuilder, MAX_DIM};
use orbis_content::schema::entity::EntityDef;
use orbis_content::schema::grid::Direction;
use std::collections::BTreeMap;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut width: usize = MAX_DIM;
    let mut height: usize = MAX_DIM;
    let mut prefix = "Maze".to_string();
    let mut icon = "O".to_string();
    let mut color = "gray".to_string();
    let mut seed: Option<u64> = None;
    let mut dump = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" if i + 1 < args.len() => {
                i += 1;
                width = args[i].parse().unwrap_or(MAX_DIM);
            }
            "--height" if i + 1 < args.len() => {
                i += 1;
                height = args[i].parse().unwrap_or(MAX_DIM);
            }
            "--prefix" if i + 1 < args.len() => {
                i += 1;
                prefix = args[i].clone();
            }
            "--icon" if i + 1 < args.len() => {
                i += 1;
                icon = args[i].clone();
            }
            "--color" if i + 1 < args.len() => {
                i += 1;
                color = args[i].clone();
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().ok();
            }
            "--dump" => {
                dump = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut builder = MazeBuilder::new()
        .width(width)
        .height(height)
        .id_prefix(&prefix)
        .room_icon(&icon)
        .room_color(&color);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let rooms = builder.generate();

    // Render with the same clamp the generator applies.
    let width = width.clamp(1, MAX_DIM);
    let height = height.clamp(1, MAX_DIM);
    print!("{}", render_map(&rooms, width, height, &prefix, &icon));

    if dump {
        match ron::ser::to_string_pretty(&rooms, ron::ser::PrettyConfig::default()) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("RON serialization failed: {e}"),
        }
    }
}

fn render_map(
    rooms: &BTreeMap<String, EntityDef>,
    width: usize,
    height: usize,
    prefix: &str,
    icon: &str,
) -> String {
    let glyph = icon.chars().next().unwrap_or(' ');
    let has_exit = |row: usize, col: usize, dir: Direction| -> bool {
        rooms
            .get(&format!("{prefix}_r{row}_c{col}"))
            .and_then(|def| def.room())
            .map(|rc| rc.exits.contains_key(&dir))
            .unwrap_or(false)
    };

    let mut out = String::new();
    for row in 0..height {
        for col in 0..width {
            out.push('+');
            out.push_str(if has_exit(row, col, Direction::North) {
                "   "
            } else {
                "---"
            });
        }
        out.push_str("+\n");

        for col in 0..width {
            out.push(if has_exit(row, col, Direction::West) {
                ' '
            } else {
                '|'
            });
            out.push(' ');
            out.push(glyph);
            out.push(' ');
        }
        out.push_str("|\n");
    }
    for _ in 0..width {
        out.push_str("+---");
    }
    out.push_str("+\n");
    out
}

fn print_usage() {
    eprintln!("Usage: preview [--width <n>] [--height <n>] [--prefix <s>] [--icon <s>]");
    eprintln!("               [--color <s>] [--seed <n>] [--dump]");
}
