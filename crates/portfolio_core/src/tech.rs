//! Technology brand catalog used by skill bars and tech-stack chips.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const DEVICON: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons";
const SIMPLE_ICONS_CDN: &str = "https://cdn.simpleicons.org";
const FALLBACK_COLOR: &str = "#6B7280";

/// Brand metadata for one technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechInfo {
    /// Brand color as `#RRGGBB`.
    pub color: String,
    /// Slug on the simple-icons CDN.
    pub icon_slug: Option<String>,
    /// Direct icon URL; takes priority over `icon_slug`.
    pub icon_url: Option<String>,
    /// Shown when no icon loads.
    pub initials: String,
}

enum Icon {
    Slug(&'static str),
    Devicon(&'static str),
    Url(&'static str),
}

static CATALOG: Lazy<HashMap<&'static str, TechInfo>> = Lazy::new(|| {
    use self::Icon::{Devicon, Slug, Url};
    let entries: [(&str, &str, Icon, &str); 29] = [
        ("Node.js", "#339933", Slug("nodedotjs"), "Nj"),
        ("Django", "#092E20", Slug("django"), "Dj"),
        ("NestJS", "#E0234E", Slug("nestjs"), "Ne"),
        ("FastAPI", "#009688", Slug("fastapi"), "Fa"),
        ("ASP.NET Core", "#512BD4", Slug("dotnet"), ".N"),
        ("React", "#61DAFB", Slug("react"), "Re"),
        ("Vue.js", "#4FC08D", Slug("vuedotjs"), "Vu"),
        ("Angular", "#DD0031", Slug("angular"), "Ng"),
        ("Svelte", "#FF3E00", Slug("svelte"), "Sv"),
        ("Next.js", "#000000", Slug("nextdotjs"), "Nx"),
        ("PostgreSQL", "#4169E1", Slug("postgresql"), "Pg"),
        ("MySQL", "#4479A1", Slug("mysql"), "My"),
        ("Redis", "#DC382D", Slug("redis"), "Rd"),
        (
            "Microsoft SQL Server",
            "#CC2927",
            Devicon("microsoftsqlserver/microsoftsqlserver-plain.svg"),
            "Ms",
        ),
        ("Docker", "#2496ED", Slug("docker"), "Dk"),
        ("Kubernetes", "#326CE5", Slug("kubernetes"), "K8"),
        ("Terraform", "#7B42BC", Slug("terraform"), "Tf"),
        ("Jenkins", "#D24939", Slug("jenkins"), "Jk"),
        ("GitHub Actions", "#2088FF", Slug("githubactions"), "GA"),
        ("Postman/Swagger", "#FF6C37", Slug("postman"), "Pm"),
        (
            "AWS",
            "#FF9900",
            Devicon("amazonwebservices/amazonwebservices-original-wordmark.svg"),
            "AW",
        ),
        ("Google Cloud", "#4285F4", Slug("googlecloud"), "GC"),
        (
            "Microsoft Azure",
            "#0078D4",
            Devicon("azure/azure-original.svg"),
            "Az",
        ),
        ("Vercel", "#000000", Slug("vercel"), "Vc"),
        ("n8n", "#EA4B71", Slug("n8n"), "n8"),
        (
            "OpenAI API",
            "#412991",
            Url("https://cdn.worldvectorlogo.com/logos/openai-2.svg"),
            "AI",
        ),
        ("Claude", "#D97706", Slug("anthropic"), "Cl"),
        (
            "Cursor",
            "#000000",
            Url("https://www.cursor.com/brand/icon.svg"),
            "Cu",
        ),
        ("TensorFlow", "#FF6F00", Slug("tensorflow"), "TF"),
    ];

    entries
        .into_iter()
        .map(|(name, color, icon, initials)| {
            let (icon_slug, icon_url) = match icon {
                Slug(slug) => (Some(slug.to_string()), None),
                Devicon(path) => (None, Some(format!("{DEVICON}/{path}"))),
                Url(url) => (None, Some(url.to_string())),
            };
            let info = TechInfo {
                color: color.to_string(),
                icon_slug,
                icon_url,
                initials: initials.to_string(),
            };
            (name, info)
        })
        .collect()
});

/// Catalog entry for `name`, or a neutral fallback using its first two
/// characters as initials.
pub fn tech_info(name: &str) -> TechInfo {
    CATALOG.get(name).cloned().unwrap_or_else(|| TechInfo {
        color: FALLBACK_COLOR.to_string(),
        icon_slug: None,
        icon_url: None,
        initials: name.chars().take(2).collect(),
    })
}

/// Icon URL: direct URL, else simple-icons tinted with the brand color.
pub fn tech_icon_url(name: &str) -> Option<String> {
    let info = tech_info(name);
    if let Some(url) = info.icon_url {
        return Some(url);
    }
    let slug = info.icon_slug?;
    let hex = info.color.trim_start_matches('#');
    Some(format!("{SIMPLE_ICONS_CDN}/{slug}/{hex}"))
}

#[cfg(test)]
mod tests {
    use super::{tech_icon_url, tech_info, DEVICON};

    #[test]
    fn known_tech_uses_catalog_entry() {
        let info = tech_info("PostgreSQL");
        assert_eq!(info.color, "#4169E1");
        assert_eq!(info.initials, "Pg");
    }

    #[test]
    fn unknown_tech_falls_back_to_initials() {
        let info = tech_info("Zig");
        assert_eq!(info.color, "#6B7280");
        assert_eq!(info.initials, "Zi");
        assert_eq!(tech_icon_url("Zig"), None);
    }

    #[test]
    fn icon_url_prefers_direct_url_over_slug() {
        assert_eq!(
            tech_icon_url("React").as_deref(),
            Some("https://cdn.simpleicons.org/react/61DAFB")
        );
        let azure = tech_icon_url("Microsoft Azure").unwrap();
        assert_eq!(azure, format!("{DEVICON}/azure/azure-original.svg"));
    }
}
