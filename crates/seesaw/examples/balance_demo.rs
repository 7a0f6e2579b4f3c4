//! Balance demo: places and removes weights, prints the torque ledger,
//! and round-trips the layout through a JSON file.

use seesaw::{
    BalanceModel, LayoutError, Vec2, load_layout_file, restore_layout, save_layout_file,
};

fn print_state(label: &str, model: &BalanceModel) {
    let b = model.balance();
    println!(
        "{label:<28} {:>4} weights   left {:>7.1}   right {:>7.1}   tilt {:>+6.2}°",
        model.len(),
        b.left_torque,
        b.right_torque,
        b.tilt_deg,
    );
}

fn main() -> Result<(), LayoutError> {
    let mut model = BalanceModel::default();
    let board = model.board();
    println!(
        "board: width {} px, pivot at {}, margins at {} and {}\n",
        board.width,
        board.center(),
        board.edge_margin(),
        board.width - board.edge_margin(),
    );

    print_state("empty", &model);

    // Clicks arrive relative to the board center; the board is flat so far.
    let heavy = model.place(5.0, Vec2::new(-100.0, 0.0));
    print_state("5 kg at -100", &model);

    model.place(3.0, Vec2::new(200.0, 0.0));
    print_state("3 kg at +200", &model);

    // The board is tilted now. A click at the same screen spot as before no
    // longer maps to the same board offset; the model un-rotates it.
    let w = model.place(1.0, Vec2::new(200.0, 0.0));
    print_state("1 kg at +200 (tilted)", &model);
    println!("    board offset after un-rotation: {:+.2}", w.offset);

    // Far off the end of the board: clamped to the edge margin.
    let clamped = model.place(2.0, Vec2::new(5000.0, 0.0));
    print_state("2 kg clamped to edge", &model);
    println!("    clamped position: {} (offset {:+})", clamped.position, clamped.offset);

    model.remove(heavy.id);
    print_state("heavy weight removed", &model);

    // Round-trip the layout through a file.
    let path = std::env::temp_dir().join("seesaw_layout.json");
    save_layout_file(&path, &model)?;
    let records = load_layout_file(&path)?;

    let mut reloaded = BalanceModel::default();
    restore_layout(&mut reloaded, &records);
    print_state("reloaded from file", &reloaded);

    model.reset();
    print_state("reset", &model);

    Ok(())
}
