use jobboard_landing::{resolve_active_section, ScrollState, Section};

fn home_and_updates() -> Vec<Section> {
    vec![
        Section::new("home", "Home", 0.0, 600.0),
        Section::new("updates", "Updates", 600.0, 500.0),
    ]
}

#[test]
fn probe_is_viewport_centre() {
    let sections = home_and_updates();

    // probe = 0 + 800 / 2 = 400
    assert_eq!(resolve_active_section(&ScrollState::new(0.0, 800.0), &sections), Some("home"));
    // probe = 500 + 400 = 900
    assert_eq!(resolve_active_section(&ScrollState::new(500.0, 800.0), &sections), Some("updates"));
    // probe = 800 + 400 = 1200, past the end of "updates" (1100)
    assert_eq!(resolve_active_section(&ScrollState::new(800.0, 800.0), &sections), None);
}

#[test]
fn empty_section_list_never_matches() {
    for offset in [0.0, 250.0, 10_000.0] {
        assert_eq!(resolve_active_section(&ScrollState::new(offset, 800.0), &[]), None);
    }
}

#[test]
fn active_section_contains_probe_for_every_offset() {
    let sections = vec![
        Section::new("home", "Home", 0.0, 600.0),
        Section::new("jobs", "Jobs", 600.0, 900.0),
        Section::new("updates", "Updates", 1_500.0, 500.0),
    ];

    for step in 0..=50 {
        let scroll = ScrollState::new(f64::from(step) * 50.0, 700.0);
        let probe = scroll.probe();

        let containing: Vec<&Section> = sections.iter().filter(|s| s.contains(probe)).collect();
        assert!(containing.len() <= 1);

        match resolve_active_section(&scroll, &sections) {
            Some(id) => {
                let active = sections.iter().find(|s| s.id == id).unwrap();
                assert!(probe >= active.top_offset && probe < active.bottom());
                assert_eq!(containing[0].id, id);
            }
            None => assert!(containing.is_empty()),
        }
    }
}

#[test]
fn boundary_belongs_to_the_lower_section() {
    let sections = home_and_updates();
    // probe = 200 + 400 = 600, exactly where "updates" starts
    assert_eq!(resolve_active_section(&ScrollState::new(200.0, 800.0), &sections), Some("updates"));
}

#[test]
fn overlapping_sections_resolve_to_the_last_match() {
    let sections = vec![
        Section::new("hero", "Hero", 0.0, 1_000.0),
        Section::new("banner", "Banner", 200.0, 400.0),
        Section::new("footer", "Footer", 900.0, 100.0),
    ];
    // probe = 400, inside both "hero" and "banner"
    assert_eq!(resolve_active_section(&ScrollState::new(0.0, 800.0), &sections), Some("banner"));
    // probe = 950, inside both "hero" and "footer"
    assert_eq!(resolve_active_section(&ScrollState::new(550.0, 800.0), &sections), Some("footer"));
}

#[test]
fn resolution_is_repeatable() {
    let sections = home_and_updates();
    let scroll = ScrollState::new(321.0, 768.0);
    let first = resolve_active_section(&scroll, &sections);
    assert_eq!(resolve_active_section(&scroll, &sections), first);
}
