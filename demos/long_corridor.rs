//! Long corridor demo — a 10x1 maze degenerates into a straight corridor;
//! walk it east and print each room on the way.
//!
//! Run with: cargo run --example long_corridor

use orbis_content::core::maze::MazeBuilder;
use orbis_content::schema::grid::Direction;

fn main() {
    let rooms = MazeBuilder::new()
        .width(10)
        .height(1)
        .id_prefix("Corridor")
        .room_icon("=")
        .seed(7)
        .generate();

    let mut current = "Corridor_r0_c0".to_string();
    loop {
        let room = &rooms[&current];
        println!("{:<16} {:?}", room.id, room.aliases);

        match room.room().and_then(|rc| rc.exits.get(&Direction::East)) {
            Some(next) => current = next.clone(),
            None => break,
        }
    }
}
