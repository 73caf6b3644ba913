use super::{Commentary, LineContext};

/// Built-in English commentary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCommentary;

fn pick<'t>(templates: &[&'t str], variant: usize) -> &'t str {
    templates.get(variant % templates.len().max(1)).copied().unwrap_or("")
}

fn fill(template: &str, ctx: &LineContext<'_>) -> String {
    template
        .replace("{player}", ctx.player)
        .replace("{other}", ctx.other.unwrap_or("a teammate"))
        .replace("{team}", ctx.team)
        .replace("{home}", &ctx.score.0.to_string())
        .replace("{away}", &ctx.score.1.to_string())
}

fn line(ctx: &LineContext<'_>, templates: &[&str]) -> String {
    format!("{}' {}", ctx.minute, fill(pick(templates, ctx.variant), ctx))
}

impl Commentary for PlainCommentary {
    fn render_goal(&self, ctx: &LineContext<'_>) -> String {
        match ctx.other {
            Some(_) => line(
                ctx,
                &[
                    "GOAL! {player} finishes after a fine ball from {other}. {home}-{away}",
                    "GOAL for {team}! {other} sets it up and {player} buries it. {home}-{away}",
                    "{player} scores! {other} with the assist. {home}-{away}",
                ],
            ),
            None => line(
                ctx,
                &[
                    "GOAL! {player} fires it into the net. {home}-{away}",
                    "GOAL for {team}! {player} does it alone. {home}-{away}",
                    "{player} scores a superb solo goal! {home}-{away}",
                ],
            ),
        }
    }

    fn render_miss(&self, ctx: &LineContext<'_>) -> String {
        line(
            ctx,
            &[
                "{player} shoots wide.",
                "{player} blazes it over the bar!",
                "So close from {player}, just past the post.",
            ],
        )
    }

    fn render_save(&self, ctx: &LineContext<'_>) -> String {
        line(
            ctx,
            &[
                "Great save by {other} to deny {player}!",
                "{player} tests the keeper, {other} holds on.",
                "{other} gets down well to stop {player}.",
            ],
        )
    }

    fn render_foul(&self, ctx: &LineContext<'_>) -> String {
        line(
            ctx,
            &[
                "Foul by {player} on {other}.",
                "{player} brings down {other}. Free kick.",
                "The referee blows for a foul by {player}.",
            ],
        )
    }

    fn render_card(&self, ctx: &LineContext<'_>, red: bool) -> String {
        if red {
            line(
                ctx,
                &[
                    "RED CARD! {player} is sent off.",
                    "{player} sees red! {team} are down a man.",
                    "Off goes {player}, the referee shows red.",
                ],
            )
        } else {
            line(
                ctx,
                &[
                    "Yellow card for {player}.",
                    "{player} goes into the book.",
                    "The referee cautions {player}.",
                ],
            )
        }
    }

    fn render_injury(&self, ctx: &LineContext<'_>) -> String {
        line(
            ctx,
            &[
                "{player} is down injured and has to come off.",
                "Bad news for {team}: {player} cannot continue.",
                "{player} limps off with an injury.",
            ],
        )
    }

    fn render_corner(&self, ctx: &LineContext<'_>) -> String {
        line(
            ctx,
            &["Corner to {team}.", "{team} win a corner.", "{player} forces a corner for {team}."],
        )
    }

    fn render_var_check(&self, ctx: &LineContext<'_>) -> String {
        line(
            ctx,
            &[
                "VAR is checking the goal by {player}.",
                "Hold on, the referee is checking VAR.",
                "The goal from {player} is under review.",
            ],
        )
    }

    fn render_var_decision(&self, ctx: &LineContext<'_>, overturned: bool) -> String {
        if overturned {
            line(
                ctx,
                &[
                    "VAR: goal disallowed!",
                    "No goal! The strike from {player} is ruled out.",
                    "Heartbreak for {team}, VAR rules it out.",
                ],
            )
        } else {
            line(
                ctx,
                &[
                    "VAR: the goal stands!",
                    "Check complete, the goal by {player} is given.",
                    "Good goal confirmed for {team}.",
                ],
            )
        }
    }

    fn render_half_time(&self, ctx: &LineContext<'_>) -> String {
        line(
            ctx,
            &[
                "Half time: {home}-{away}.",
                "The referee blows for half time. {home}-{away}.",
                "That is the break, {home}-{away}.",
            ],
        )
    }
}
