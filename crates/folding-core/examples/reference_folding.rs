//! Walk through a typical session: a file opened with two references, a few expand clicks,
//! then an edit that grows the document.

use folding_core::{
    ExpandDirection, FoldingConfig, FoldingState, FoldingStateManager, Reference, ReferenceRange,
    reference_at_line,
};

fn print_state(label: &str, state: &FoldingState) {
    println!("== {label} ({} lines)", state.total_lines());
    for range in state.visible_ranges() {
        println!("  visible {}..={}", range.start_line, range.end_line);
    }
    for placeholder in state.placeholders() {
        println!(
            "  [{}] {} hidden lines ({}..={}){}{}",
            placeholder.region_index,
            placeholder.hidden_line_count,
            placeholder.start_line,
            placeholder.end_line,
            if placeholder.can_expand_up { " ↑" } else { "" },
            if placeholder.can_expand_down { " ↓" } else { "" },
        );
    }
}

fn main() {
    let references = vec![
        Reference::for_file("github.com/acme/widgets", "src/lib.rs", Some(ReferenceRange::new(20, 25))),
        Reference::for_file("github.com/acme/widgets", "src/lib.rs", Some(ReferenceRange::single(60))),
    ];

    let mut manager = FoldingStateManager::new(references, 100, FoldingConfig::default());
    manager.subscribe(|change| println!("-- {:?} (v{})", change.kind, change.new_version));
    print_state("opened", manager.state());

    manager.expand(1, ExpandDirection::Down);
    print_state("expanded gap below first reference", manager.state());

    manager.expand(0, ExpandDirection::Up);
    print_state("expanded leading region", manager.state());

    manager.resize(140);
    print_state("document grew", manager.state());

    if let Some(reference) = reference_at_line(manager.state().references(), 22) {
        println!("line 22 belongs to {}", reference.id);
    }
}
