use super::content::ContentCatalog;
use super::domain::{ChangeStance, CoreType, Interaction, Level, ValueFocus, Variant};
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Result key the scoring engine can produce but the content catalog cannot describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum ContentGap {
    Core {
        interaction: Interaction,
        core: CoreType,
    },
    Interaction {
        interaction: Interaction,
        core: CoreType,
    },
    Variant {
        interaction: Interaction,
        core: CoreType,
        variant: Variant,
    },
    ValueAxis {
        key: &'static str,
    },
    SocialAdaptability {
        level: Level,
    },
    IdentityClarity {
        level: Level,
    },
}

impl fmt::Display for ContentGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentGap::Core { interaction, core } => {
                write!(f, "core copy for {}{}", interaction.letter(), core)
            }
            ContentGap::Interaction { interaction, core } => {
                write!(f, "interaction copy for {}{}", interaction.letter(), core)
            }
            ContentGap::Variant {
                interaction,
                core,
                variant,
            } => write!(
                f,
                "variant copy for {}{}-{}",
                interaction.letter(),
                core,
                variant.key()
            ),
            ContentGap::ValueAxis { key } => write!(f, "value axis copy for {key}"),
            ContentGap::SocialAdaptability { level } => {
                write!(f, "social adaptability copy for {}", level.label())
            }
            ContentGap::IdentityClarity { level } => {
                write!(f, "identity clarity copy for {}", level.label())
            }
        }
    }
}

/// Walks every composable result key and reports missing copy. Diagnostic only:
/// each gap is logged at warn level and returned; nothing is blocked.
pub fn sanity_check(content: &ContentCatalog) -> Vec<ContentGap> {
    let mut gaps = Vec::new();

    for interaction in Interaction::ordered() {
        for core in CoreType::all() {
            if content.core_profile(core).is_none() {
                gaps.push(ContentGap::Core { interaction, core });
            }
            if content.interaction_profile(interaction).is_none() {
                gaps.push(ContentGap::Interaction { interaction, core });
            }
            for variant in Variant::ordered() {
                if content.variant_profile(variant).is_none() {
                    gaps.push(ContentGap::Variant {
                        interaction,
                        core,
                        variant,
                    });
                }
            }
        }
    }

    let value_keys = ValueFocus::ordered()
        .into_iter()
        .map(ValueFocus::key)
        .chain(ChangeStance::ordered().into_iter().map(ChangeStance::key));
    for key in value_keys {
        if !content.value_axes.contains_key(key) {
            gaps.push(ContentGap::ValueAxis { key });
        }
    }

    for level in Level::ordered() {
        if content.social_level(level).is_none() {
            gaps.push(ContentGap::SocialAdaptability { level });
        }
        if content.identity_level(level).is_none() {
            gaps.push(ContentGap::IdentityClarity { level });
        }
    }

    for gap in &gaps {
        warn!(%gap, "[sanity] missing copy");
    }

    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_content_has_no_gaps() {
        assert!(sanity_check(&ContentCatalog::standard()).is_empty());
    }

    #[test]
    fn missing_core_entry_is_reported_per_interaction() {
        let mut content = ContentCatalog::standard();
        content.personality_types.remove("SFJ");

        let gaps = sanity_check(&content);
        assert_eq!(gaps.len(), 2);
        assert!(gaps.iter().all(|gap| matches!(
            gap,
            ContentGap::Core { core, .. } if core.key() == "SFJ"
        )));
    }

    #[test]
    fn missing_variant_is_reported_for_every_combination() {
        let mut content = ContentCatalog::standard();
        content.variants.remove("T");

        let gaps = sanity_check(&content);
        assert_eq!(gaps.len(), 16);
        assert!(gaps.iter().all(|gap| matches!(
            gap,
            ContentGap::Variant {
                variant: Variant::Turbulent,
                ..
            }
        )));
        assert_eq!(gaps[0].to_string(), "variant copy for ENTJ-T");
    }

    #[test]
    fn empty_catalog_reports_value_and_level_gaps() {
        let gaps = sanity_check(&ContentCatalog::default());
        assert!(gaps.contains(&ContentGap::ValueAxis { key: "OPCO_Balance" }));
        assert!(gaps.contains(&ContentGap::IdentityClarity { level: Level::Low }));
        // 16 core + 16 interaction + 32 variant + 6 value + 6 level
        assert_eq!(gaps.len(), 76);
    }
}
