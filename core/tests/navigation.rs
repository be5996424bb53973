use parapara_core::{command_for_key, NavCommand, NavigatorState};

#[test]
fn request_previous_at_cover_is_noop() {
    let nav = NavigatorState::new(16);
    assert_eq!(nav.request(NavCommand::Previous), None);
    assert_eq!(nav.current_page(), 0);
    assert!(!nav.is_open());
}

#[test]
fn request_next_at_last_page_is_noop() {
    let mut nav = NavigatorState::new(4);
    nav.flip_completed(3);
    assert_eq!(nav.request(NavCommand::Next), None);
    assert_eq!(nav.current_page(), 3);
}

#[test]
fn sixteen_page_walkthrough_ends_at_last_page() {
    let mut nav = NavigatorState::new(16);
    let mut confirmed = 0usize;
    for _ in 0..16 {
        if nav.request(NavCommand::Next).is_some() {
            let flip = nav.flip_completed(nav.current_page() + 1);
            if flip.is_some() {
                confirmed += 1;
            }
        }
    }
    assert_eq!(nav.current_page(), 15);
    assert!(nav.is_open());
    assert_eq!(confirmed, 15);
    // The 17th request stays a strict no-op.
    assert_eq!(nav.request(NavCommand::Next), None);
}

#[test]
fn each_confirmed_flip_fires_exactly_once() {
    let mut nav = NavigatorState::new(8);
    let flip = nav.flip_completed(1).expect("index change confirmed");
    assert_eq!((flip.from, flip.to), (0, 1));
    assert!(flip.is_open);
    // The surface double-fires the same index on orientation changes.
    assert_eq!(nav.flip_completed(1), None);
    let back = nav.flip_completed(0).expect("backward flip confirmed");
    assert_eq!((back.from, back.to), (1, 0));
    assert!(!back.is_open);
}

#[test]
fn out_of_range_confirmation_is_clamped() {
    let mut nav = NavigatorState::new(5);
    let flip = nav.flip_completed(99).expect("clamped to last page");
    assert_eq!(flip.to, 4);
    assert_eq!(nav.flip_completed(99), None);
}

#[test]
fn arrow_keys_map_to_flip_commands() {
    assert_eq!(command_for_key("ArrowLeft"), Some(NavCommand::Previous));
    assert_eq!(command_for_key("ArrowRight"), Some(NavCommand::Next));
    assert_eq!(command_for_key("ArrowUp"), None);
    assert_eq!(command_for_key("a"), None);
}
