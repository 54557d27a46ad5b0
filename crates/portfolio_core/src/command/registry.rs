//! Quick-search command list and its substring filter.
//!
//! # Invariants
//! - Command order is navigation, projects (source order), social.
//! - Filtering preserves command order; grouping keeps first-seen group order.

use crate::content::ContentStore;
use crate::model::personal::PersonalInfo;

pub const GROUP_NAVIGATION: &str = "Navegación";
pub const GROUP_PROJECTS: &str = "Proyectos";
pub const GROUP_SOCIAL: &str = "Social";

/// What activating a command does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// Client-side route change, e.g. `/projects/ubapp`.
    Navigate(String),
    /// External link or `mailto:` target opened outside the site.
    OpenExternal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub group: String,
    pub action: CommandAction,
}

impl Command {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: Option<String>,
        group: impl Into<String>,
        action: CommandAction,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description,
            group: group.into(),
            action,
        }
    }

    /// Case-insensitive substring match on label, description or group.
    ///
    /// `needle` must already be lowercase; an empty needle matches.
    fn matches_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let description = self.description.as_deref().unwrap_or_default();
        self.label.to_lowercase().contains(needle)
            || description.to_lowercase().contains(needle)
            || self.group.to_lowercase().contains(needle)
    }
}

/// Commands of one group, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGroup<'a> {
    pub name: &'a str,
    pub commands: Vec<&'a Command>,
}

/// Static command list built once per content store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn from_commands(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Builds navigation, per-project and social commands from `content`.
    pub fn build(content: &ContentStore) -> Self {
        let mut commands = navigation_commands();
        commands.extend(content.all_projects().iter().map(|project| {
            Command::new(
                format!("project-{}", project.slug),
                project.title.clone(),
                Some(project.description.clone()),
                GROUP_PROJECTS,
                CommandAction::Navigate(project.route()),
            )
        }));
        commands.extend(social_commands(content.personal_info()));
        Self { commands }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands whose label, description or group contains `query`,
    /// ignoring case. An empty query keeps everything.
    pub fn filter(&self, query: &str) -> Vec<&Command> {
        let needle = query.to_lowercase();
        self.commands
            .iter()
            .filter(|command| command.matches_lowercase(&needle))
            .collect()
    }

    /// Filters, then groups the result.
    pub fn search(&self, query: &str) -> Vec<CommandGroup<'_>> {
        group_commands(self.filter(query))
    }
}

/// Stable partition by group: first-seen group order, insertion order inside.
pub fn group_commands<'a, I>(commands: I) -> Vec<CommandGroup<'a>>
where
    I: IntoIterator<Item = &'a Command>,
{
    let mut groups: Vec<CommandGroup<'a>> = Vec::new();
    for command in commands {
        let name = command.group.as_str();
        match groups.iter_mut().find(|group| group.name == name) {
            Some(group) => group.commands.push(command),
            None => groups.push(CommandGroup {
                name,
                commands: vec![command],
            }),
        }
    }
    groups
}

/// Flattens groups back into display order.
pub fn flatten_groups<'a>(groups: &[CommandGroup<'a>]) -> Vec<&'a Command> {
    groups
        .iter()
        .flat_map(|group| group.commands.iter().copied())
        .collect()
}

fn navigation_commands() -> Vec<Command> {
    [
        ("home", "Inicio", "Ir a la página principal", "/"),
        ("projects", "Proyectos", "Ver todos los proyectos", "/projects"),
        ("about", "Sobre mí", "Conocer más sobre mí", "/about"),
        ("contact", "Contacto", "Ponerse en contacto", "/contact"),
    ]
    .into_iter()
    .map(|(id, label, description, route)| {
        Command::new(
            id,
            label,
            Some(description.to_string()),
            GROUP_NAVIGATION,
            CommandAction::Navigate(route.to_string()),
        )
    })
    .collect()
}

fn social_commands(personal: &PersonalInfo) -> Vec<Command> {
    let social = &personal.social;
    let links = [
        ("github", "GitHub", social.github.as_deref()),
        ("linkedin", "LinkedIn", social.linkedin.as_deref()),
        ("twitter", "Twitter", social.twitter.as_deref()),
        ("instagram", "Instagram", social.instagram.as_deref()),
        ("website", "Sitio web", social.website.as_deref()),
    ];

    let mut commands: Vec<Command> = links
        .into_iter()
        .filter_map(|(id, label, url)| {
            let url = url.map(str::trim).filter(|url| !url.is_empty())?;
            Some(Command::new(
                id,
                label,
                Some(display_url(url)),
                GROUP_SOCIAL,
                CommandAction::OpenExternal(url.to_string()),
            ))
        })
        .collect();

    commands.push(Command::new(
        "email",
        "Email",
        Some(personal.email.clone()),
        GROUP_SOCIAL,
        CommandAction::OpenExternal(format!("mailto:{}", personal.email)),
    ));
    commands
}

/// `https://www.linkedin.com/in/someone/` -> `linkedin.com/in/someone`.
fn display_url(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::{display_url, group_commands, social_commands, Command, CommandAction};
    use crate::model::personal::PersonalInfo;
    use serde_json::json;

    fn command(id: &str, group: &str) -> Command {
        Command::new(
            id,
            id,
            None,
            group,
            CommandAction::Navigate(format!("/{id}")),
        )
    }

    #[test]
    fn display_url_strips_scheme_www_and_trailing_slash() {
        assert_eq!(
            display_url("https://www.linkedin.com/in/someone/"),
            "linkedin.com/in/someone"
        );
        assert_eq!(display_url("http://example.dev"), "example.dev");
        assert_eq!(display_url("github.com/someone"), "github.com/someone");
    }

    #[test]
    fn social_commands_follow_link_order_and_skip_blank_links() {
        let personal: PersonalInfo = serde_json::from_value(json!({
            "name": "Ana Pérez",
            "title": "Desarrolladora",
            "bio": "Bio",
            "email": "ana@example.com",
            "location": "Quito",
            "social": {
                "github": "https://github.com/ana",
                "twitter": "  ",
                "website": "https://www.ana.dev/"
            },
            "experience": { "years": 2, "description": "Proyectos varios" }
        }))
        .unwrap();

        let commands = social_commands(&personal);
        let labels: Vec<&str> = commands
            .iter()
            .map(|command| command.label.as_str())
            .collect();
        assert_eq!(labels, ["GitHub", "Sitio web", "Email"]);
        assert_eq!(commands[1].description.as_deref(), Some("ana.dev"));
        assert_eq!(
            commands[1].action,
            CommandAction::OpenExternal("https://www.ana.dev/".to_string())
        );
        assert_eq!(
            commands[2].action,
            CommandAction::OpenExternal("mailto:ana@example.com".to_string())
        );
    }

    #[test]
    fn grouping_keeps_first_seen_order_for_interleaved_groups() {
        let commands = [
            command("a", "x"),
            command("b", "y"),
            command("c", "x"),
            command("d", "z"),
            command("e", "y"),
        ];
        let groups = group_commands(commands.iter());
        let names: Vec<&str> = groups.iter().map(|group| group.name).collect();
        assert_eq!(names, ["x", "y", "z"]);
        let ids: Vec<&str> = groups[0]
            .commands
            .iter()
            .map(|command| command.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "c"]);
    }
}
