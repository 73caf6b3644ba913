//! Fluent (FTL) backed commentary.

use super::{Commentary, LineContext, TEMPLATE_VARIANTS};
use crate::error::ConfigError;
use fluent::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use std::collections::BTreeMap;
use unic_langid::LanguageIdentifier;

/// Locales with embedded resources.
pub const SUPPORTED_LOCALES: &[&str] = &["en-US", "ko-KR"];

const FALLBACK_LOCALE: &str = "en-US";

const EN_US: &str = include_str!("../../../locales/en-US.ftl");
const KO_KR: &str = include_str!("../../../locales/ko-KR.ftl");

/// Commentary rendered from Fluent bundles, falling back to en-US per key.
pub struct FluentCommentary {
    bundles: BTreeMap<String, FluentBundle<FluentResource>>,
    locale: String,
}

impl std::fmt::Debug for FluentCommentary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FluentCommentary")
            .field("locale", &self.locale)
            .field("bundles", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn build_bundle(locale: &str, source: &str) -> Result<FluentBundle<FluentResource>, ConfigError> {
    let resource = FluentResource::try_new(source.to_string())
        .map_err(|_| ConfigError::InvalidConfig(format!("failed to parse FTL for {}", locale)))?;
    let lang_id: LanguageIdentifier = locale
        .parse()
        .map_err(|_| ConfigError::InvalidConfig(format!("invalid locale: {}", locale)))?;
    let mut bundle = FluentBundle::new(vec![lang_id]);
    // plain text output, no bidi isolation marks around placeables
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|_| ConfigError::InvalidConfig(format!("duplicate FTL keys in {}", locale)))?;
    Ok(bundle)
}

impl FluentCommentary {
    /// Loads the embedded bundles and picks the best match for `requested`
    /// (e.g. `["ko-KR"]`, `["ko"]`), falling back to en-US.
    pub fn new(requested: &[&str]) -> Result<Self, ConfigError> {
        let mut bundles = BTreeMap::new();
        bundles.insert("en-US".to_string(), build_bundle("en-US", EN_US)?);
        bundles.insert("ko-KR".to_string(), build_bundle("ko-KR", KO_KR)?);
        let mut commentary = Self { bundles, locale: FALLBACK_LOCALE.to_string() };
        commentary.locale = commentary.negotiate(requested);
        log::debug!("commentary locale: {}", commentary.locale);
        Ok(commentary)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn negotiate(&self, requested: &[&str]) -> String {
        let available: Vec<LanguageIdentifier> =
            self.bundles.keys().filter_map(|k| k.parse().ok()).collect();
        let requested: Vec<LanguageIdentifier> =
            requested.iter().filter_map(|l| l.parse().ok()).collect();
        let default: Option<LanguageIdentifier> = FALLBACK_LOCALE.parse().ok();

        let negotiated = negotiate_languages(
            &requested,
            &available,
            default.as_ref(),
            NegotiationStrategy::Filtering,
        );
        negotiated
            .first()
            .map(|l| l.to_string())
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
    }

    fn format_in(&self, locale: &str, key: &str, args: &FluentArgs<'_>) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let text = bundle.format_pattern(pattern, Some(args), &mut errors);
        if !errors.is_empty() {
            log::warn!("fluent errors for {} in {}: {:?}", key, locale, errors);
        }
        Some(text.into_owned())
    }

    /// Formats `key`, trying the current locale then en-US, else `[key]`.
    fn format(&self, key: &str, ctx: &LineContext<'_>) -> String {
        let mut args = FluentArgs::new();
        args.set("minute", FluentValue::from(ctx.minute as i64));
        args.set("player", FluentValue::from(ctx.player));
        args.set("other", FluentValue::from(ctx.other.unwrap_or("")));
        args.set("team", FluentValue::from(ctx.team));
        args.set("home", FluentValue::from(ctx.score.0 as i64));
        args.set("away", FluentValue::from(ctx.score.1 as i64));

        let text = self
            .format_in(&self.locale, key, &args)
            .or_else(|| self.format_in(FALLBACK_LOCALE, key, &args))
            .unwrap_or_else(|| format!("[{}]", key));
        format!("{}' {}", ctx.minute, text)
    }

    fn keyed(&self, stem: &str, ctx: &LineContext<'_>) -> String {
        let key = format!("{}-{}", stem, ctx.variant % TEMPLATE_VARIANTS);
        self.format(&key, ctx)
    }
}

impl Commentary for FluentCommentary {
    fn render_goal(&self, ctx: &LineContext<'_>) -> String {
        let stem = if ctx.other.is_some() { "goal-assisted" } else { "goal" };
        self.keyed(stem, ctx)
    }

    fn render_miss(&self, ctx: &LineContext<'_>) -> String {
        self.keyed("miss", ctx)
    }

    fn render_save(&self, ctx: &LineContext<'_>) -> String {
        self.keyed("save", ctx)
    }

    fn render_foul(&self, ctx: &LineContext<'_>) -> String {
        self.keyed("foul", ctx)
    }

    fn render_card(&self, ctx: &LineContext<'_>, red: bool) -> String {
        self.keyed(if red { "card-red" } else { "card-yellow" }, ctx)
    }

    fn render_injury(&self, ctx: &LineContext<'_>) -> String {
        self.keyed("injury", ctx)
    }

    fn render_corner(&self, ctx: &LineContext<'_>) -> String {
        self.keyed("corner", ctx)
    }

    fn render_var_check(&self, ctx: &LineContext<'_>) -> String {
        self.keyed("var-check", ctx)
    }

    fn render_var_decision(&self, ctx: &LineContext<'_>, overturned: bool) -> String {
        self.keyed(if overturned { "var-overturned" } else { "var-upheld" }, ctx)
    }

    fn render_half_time(&self, ctx: &LineContext<'_>) -> String {
        self.keyed("half-time", ctx)
    }
}
