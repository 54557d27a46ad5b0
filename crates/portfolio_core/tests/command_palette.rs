use portfolio_core::command::{GROUP_NAVIGATION, GROUP_PROJECTS, GROUP_SOCIAL};
use portfolio_core::{
    CommandAction, CommandPalette, CommandRegistry, ContentStore, PaletteKey, PaletteOutcome,
    PaletteSession,
};

fn registry() -> CommandRegistry {
    CommandRegistry::build(&ContentStore::bundled().unwrap())
}

#[test]
fn registry_lists_navigation_projects_then_social() {
    let registry = registry();
    let store = ContentStore::bundled().unwrap();
    assert_eq!(registry.len(), 4 + store.all_projects().len() + 3);

    let groups = registry.search("");
    let names: Vec<&str> = groups.iter().map(|group| group.name).collect();
    assert_eq!(names, [GROUP_NAVIGATION, GROUP_PROJECTS, GROUP_SOCIAL]);
    assert_eq!(groups[1].commands.len(), store.all_projects().len());
}

#[test]
fn project_commands_route_to_detail_pages() {
    let registry = registry();
    let command = registry
        .commands()
        .iter()
        .find(|command| command.id == "project-ubapp")
        .unwrap();
    assert_eq!(
        command.action,
        CommandAction::Navigate("/projects/ubapp".to_string())
    );
}

#[test]
fn email_command_opens_mailto() {
    let registry = registry();
    let email = registry
        .commands()
        .iter()
        .find(|command| command.id == "email")
        .unwrap();
    assert_eq!(
        email.action,
        CommandAction::OpenExternal("mailto:jonathan_jd@outlook.com".to_string())
    );
}

#[test]
fn query_without_matches_yields_no_groups_and_a_message() {
    let registry = registry();
    let mut session = PaletteSession::new(&registry);
    session.set_query("zzzzzz");

    assert!(session.groups().is_empty());
    assert!(session.is_empty());
    assert_eq!(session.selected_index(), 0);
    assert_eq!(
        session.empty_message().as_deref(),
        Some("Sin resultados para \u{201c}zzzzzz\u{201d}")
    );
    assert_eq!(
        session.handle_key(PaletteKey::Enter),
        PaletteOutcome::Continue
    );
    assert_eq!(
        session.handle_key(PaletteKey::Down),
        PaletteOutcome::Continue
    );
    assert_eq!(session.selected_index(), 0);
}

#[test]
fn matching_ignores_case() {
    let registry = registry();
    let mut session = PaletteSession::new(&registry);
    session.set_query("UBAPP");
    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results()[0].id, "project-ubapp");
}

#[test]
fn group_name_is_searchable() {
    let registry = registry();
    let mut session = PaletteSession::new(&registry);
    session.set_query("social");
    assert!(!session.is_empty());
    for command in session.results() {
        assert_eq!(command.group, GROUP_SOCIAL);
    }
}

#[test]
fn cursor_clamps_at_both_ends() {
    let registry = registry();
    let mut session = PaletteSession::new(&registry);
    let last = session.results().len() - 1;

    session.handle_key(PaletteKey::Up);
    assert_eq!(session.selected_index(), 0);

    for _ in 0..(last + 5) {
        session.handle_key(PaletteKey::Down);
    }
    assert_eq!(session.selected_index(), last);

    session.hover(1);
    assert_eq!(session.selected_index(), 1);
    session.hover(last + 10);
    assert_eq!(session.selected_index(), last);
}

#[test]
fn cursor_resets_only_when_query_text_changes() {
    let registry = registry();
    let mut session = PaletteSession::new(&registry);
    session.handle_key(PaletteKey::Down);
    session.handle_key(PaletteKey::Down);
    assert_eq!(session.selected_index(), 2);

    session.set_query("");
    assert_eq!(session.selected_index(), 2);

    session.set_query("o");
    assert_eq!(session.selected_index(), 0);
}

#[test]
fn enter_activates_selection_and_closes_overlay() {
    let registry = registry();
    let mut palette = CommandPalette::new(&registry);
    palette.open().set_query("ubapp");

    let outcome = palette.handle_key(PaletteKey::Enter);
    assert_eq!(
        outcome,
        PaletteOutcome::Activate(CommandAction::Navigate("/projects/ubapp".to_string()))
    );
    assert!(!palette.is_open());
}

#[test]
fn escape_closes_without_activation() {
    let registry = registry();
    let mut palette = CommandPalette::new(&registry);
    palette.open();
    assert_eq!(
        palette.handle_key(PaletteKey::Escape),
        PaletteOutcome::Close
    );
    assert!(!palette.is_open());
    assert_eq!(
        palette.handle_key(PaletteKey::Enter),
        PaletteOutcome::Continue
    );
}

#[test]
fn reopening_starts_a_fresh_session() {
    let registry = registry();
    let mut palette = CommandPalette::new(&registry);
    let session = palette.open();
    session.set_query("git");
    session.handle_key(PaletteKey::Down);

    palette.close();
    let session = palette.open();
    assert_eq!(session.query(), "");
    assert_eq!(session.selected_index(), 0);
    assert_eq!(session.results().len(), registry.len());
}

#[test]
fn toggle_opens_and_closes() {
    let registry = registry();
    let mut palette = CommandPalette::new(&registry);
    palette.toggle();
    assert!(palette.is_open());

    palette.session_mut().unwrap().set_query("contacto");
    palette.toggle();
    assert!(!palette.is_open());
    assert!(palette.session().is_none());
}
