use std::fmt;

/// Declares the closed key catalog: the enum, its dotted ids, and the reverse
/// lookup, from one list so they cannot drift apart.
macro_rules! translation_keys {
    ($($variant:ident => $id:literal,)*) => {
        /// Identifier of one localizable string.
        ///
        /// The catalog is closed and shared by every locale. Each key has a
        /// stable dotted id (`hero.tagline`) used in catalog files.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TranslationKey {
            $($variant,)*
        }

        impl TranslationKey {
            /// Every key, in catalog order.
            pub const ALL: &'static [TranslationKey] = &[$(TranslationKey::$variant,)*];

            /// Dotted id as written in catalog files.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(TranslationKey::$variant => $id,)*
                }
            }

            pub fn from_id(id: &str) -> Option<Self> {
                match id {
                    $($id => Some(TranslationKey::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

translation_keys! {
    // Hero
    HeroTagline => "hero.tagline",
    HeroRole1 => "hero.role.1",
    HeroRole2 => "hero.role.2",
    HeroSubtitleRest => "hero.subtitle.rest",
    HeroIntro => "hero.intro",
    HeroCurrent => "hero.current",
    HeroConnect => "hero.connect",
    HeroScroll => "hero.scroll",
    HeroBackToTop => "hero.backToTop",

    // Skills
    SkillsTitle => "skills.title",
    SkillsTechnical => "skills.technical",
    SkillsTools => "skills.tools",
    SkillsSoft => "skills.soft",
    SkillsLevel => "skills.level",

    // Projects
    ProjectsTitle => "projects.title",
    ProjectsViewAll => "projects.viewAll",
    ProjectsStatusCompleted => "projects.status.completed",
    ProjectsStatusInProgress => "projects.status.in-progress",
    ProjectsViewDemo => "projects.viewDemo",
    ProjectsViewCode => "projects.viewCode",
    ProjectsNote => "projects.note",
    ProjectsFilterAll => "projects.filter.all",
    ProjectsFilterWeb => "projects.filter.web",
    ProjectsFilterAi => "projects.filter.ai",
    ProjectsFilterOther => "projects.filter.other",
    ProjectsFilterMobile => "projects.filter.mobile",

    // Contact
    ContactTitle => "contact.title",
    ContactSubtitle => "contact.subtitle",
    ContactName => "contact.name",
    ContactEmail => "contact.email",
    ContactMessage => "contact.message",
    ContactSend => "contact.send",
    ContactSending => "contact.sending",
    ContactSuccess => "contact.success",
    ContactError => "contact.error",
    ContactLocation => "contact.location",
    ContactLocationValue => "contact.location.value",
    ContactFloatingTooltip => "contact.floating.tooltip",

    // Navigation
    NavHome => "nav.home",
    NavSkills => "nav.skills",
    NavProjects => "nav.projects",
    NavContact => "nav.contact",
    NavToggleTheme => "nav.toggleTheme",
    NavToggleLang => "nav.toggleLang",

    // Tech stack
    TechPython => "tech.python",
    TechAiml => "tech.aiml",
    TechCsharp => "tech.csharp",

    // Social links
    SocialGithub => "social.github",
    SocialLinkedin => "social.linkedin",
    SocialEmail => "social.email",

    // Achievements
    AchievementWelcomeTitle => "achievement.welcome.title",
    AchievementWelcomeDesc => "achievement.welcome.desc",
    AchievementCuriousTitle => "achievement.curious.title",
    AchievementCuriousDesc => "achievement.curious.desc",
    AchievementHalfwayTitle => "achievement.halfway.title",
    AchievementHalfwayDesc => "achievement.halfway.desc",
    AchievementDeepTitle => "achievement.deep.title",
    AchievementDeepDesc => "achievement.deep.desc",
    AchievementMasterTitle => "achievement.master.title",
    AchievementMasterDesc => "achievement.master.desc",

    // Random facts
    FactsAiText => "facts.ai.text",
    FactsAssistantText => "facts.assistant.text",
    FactsTechText => "facts.tech.text",
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_reversible() {
        let mut seen = HashSet::new();
        for &key in TranslationKey::ALL {
            assert!(seen.insert(key.as_str()), "duplicate id {key}");
            assert_eq!(TranslationKey::from_id(key.as_str()), Some(key));
        }
        assert_eq!(TranslationKey::ALL.len(), 63);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        assert_eq!(TranslationKey::from_id("hero"), None);
        assert_eq!(TranslationKey::from_id("projects.status.archived"), None);
    }
}
