//! Subcommand handlers

use std::io::Write;

use anyhow::{Context, Result};
use boardcount_core::{view, MutationOutcome, Report, TranscriptionService};
use boardcount_domain::{MetadataPatch, SlotNumber, SlotStatus};
use tracing::info;

use crate::cli::{Commands, MetaArgs};
use crate::context::AppContext;
use crate::render;

/// Run `command` against `ctx`, writing user-facing output to `out`.
///
/// `transcriber` is only consulted by `listen`.
pub fn execute(
    ctx: &mut AppContext,
    command: Commands,
    out: &mut dyn Write,
    transcriber: &dyn TranscriptionService,
) -> Result<()> {
    match command {
        Commands::Show { filter, output } => {
            let slots = view::filter(ctx.store.roster(), filter);
            if output.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&slots)?)?;
            } else {
                write!(out, "{}", render::roster(&slots, view::counts(ctx.store.roster())))?;
            }
        }
        Commands::Toggle { numbers, to } => toggle(ctx, &numbers, to, out)?,
        Commands::Name { number, name } => {
            let name = name.join(" ");
            let outcome = ctx.store.set_name(number, &name)?;
            match (outcome, name.is_empty()) {
                (MutationOutcome::Applied, false) => writeln!(out, "slot {number}: {name}")?,
                (MutationOutcome::Applied, true) => writeln!(out, "slot {number}: name cleared")?,
                (MutationOutcome::Unchanged, _) => {
                    writeln!(out, "slot {number}: unchanged")?;
                }
            }
        }
        Commands::Add { name } => {
            let name = name.join(" ");
            match ctx.store.add_by_name(&name)? {
                Some(number) => writeln!(out, "added {name} as slot {number}")?,
                None if ctx.store.roster().contains_name(&name) => {
                    writeln!(out, "{name} is already on the roster")?;
                }
                None if name.is_empty() => writeln!(out, "no name given")?,
                None => writeln!(out, "no slot number left for {name}")?,
            }
        }
        Commands::Remove { name } => {
            let name = name.join(" ");
            match ctx.store.remove_by_name(&name)? {
                MutationOutcome::Applied => writeln!(out, "removed {name}")?,
                MutationOutcome::Unchanged => writeln!(out, "no slot named {name}")?,
            }
        }
        Commands::Meta(args) => meta(ctx, args, out)?,
        Commands::Run { text } => {
            let report = ctx.interpreter.execute(&mut ctx.store, &text.join(" "))?;
            writeln!(out, "{}", render::command_report(&report))?;
        }
        Commands::Listen => {
            let mut heard = 0usize;
            while let Some(report) = ctx.interpreter.listen(&mut ctx.store, transcriber)? {
                heard += 1;
                writeln!(out, "{}", render::command_report(&report))?;
            }
            info!(heard, "input closed");
        }
        Commands::Report { date, output } => {
            let date = date.unwrap_or_else(render::today);
            let report =
                Report::build(ctx.store.roster(), ctx.store.metadata(), date, ctx.layout);
            if output.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                write!(out, "{}", render::report(&report))?;
            }
        }
        Commands::Config => {
            writeln!(out, "{}", serde_json::to_string_pretty(&ctx.config)?)?;
        }
    }
    Ok(())
}

fn toggle(
    ctx: &mut AppContext,
    numbers: &[SlotNumber],
    to: Option<SlotStatus>,
    out: &mut dyn Write,
) -> Result<()> {
    for &number in numbers {
        let outcome = match to {
            Some(status) => ctx.store.set_status(number, status),
            None => ctx.store.toggle_status(number),
        }
        .with_context(|| format!("failed to update slot {number}"))?;

        match (outcome, ctx.store.roster().get(number)) {
            (MutationOutcome::Applied, Some(slot)) => {
                writeln!(out, "slot {number}: {}", slot.status)?;
            }
            (_, Some(slot)) => writeln!(out, "slot {number}: already {}", slot.status)?,
            (_, None) => writeln!(out, "slot {number}: not on the roster")?,
        }
    }
    Ok(())
}

fn meta(ctx: &mut AppContext, args: MetaArgs, out: &mut dyn Write) -> Result<()> {
    let patch = MetadataPatch {
        date: args.date,
        manager_name: args.manager,
        net_meal_count: args.net_meal,
        market_budget: args.market,
    };
    if !patch.is_empty() {
        ctx.store.set_metadata(patch)?;
    }

    let metadata = ctx.store.metadata();
    if args.output.json {
        writeln!(out, "{}", serde_json::to_string_pretty(metadata)?)?;
    } else {
        write!(out, "{}", render::metadata(metadata))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use boardcount_domain::{ActivationPolicy, Config, FilterMode};
    use boardcount_infra::MemoryStore;

    use super::*;
    use crate::cli::OutputArgs;
    use crate::transcription::LineTranscriber;

    fn context(policy: ActivationPolicy) -> AppContext {
        let mut config = Config::default();
        config.roster.activation_policy = policy;
        AppContext::with_storage(config, Arc::new(MemoryStore::new())).unwrap()
    }

    fn run(ctx: &mut AppContext, command: Commands) -> String {
        run_with_input(ctx, command, "")
    }

    fn run_with_input(ctx: &mut AppContext, command: Commands, input: &str) -> String {
        let transcriber = LineTranscriber::new(Cursor::new(input.to_string()));
        let mut out = Vec::new();
        execute(ctx, command, &mut out, &transcriber).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn toggle_reports_new_status_and_missing_slots() {
        let mut ctx = context(ActivationPolicy::Toggle);
        let text = run(&mut ctx, Commands::Toggle { numbers: vec![3, 500], to: None });
        assert_eq!(text, "slot 3: active\nslot 500: not on the roster\n");

        let text =
            run(&mut ctx, Commands::Toggle { numbers: vec![3], to: Some(SlotStatus::Active) });
        assert_eq!(text, "slot 3: already active\n");
    }

    #[test]
    fn add_prints_the_assigned_number() {
        let mut ctx = context(ActivationPolicy::Toggle);
        let text = run(&mut ctx, Commands::Add { name: vec!["John".into(), "Smith".into()] });
        assert_eq!(text, "added John Smith as slot 161\n");

        let text = run(&mut ctx, Commands::Add { name: vec!["John Smith".into()] });
        assert_eq!(text, "John Smith is already on the roster\n");
    }

    #[test]
    fn add_reports_the_number_it_was_given_after_removals() {
        let mut ctx = context(ActivationPolicy::Toggle);
        run(&mut ctx, Commands::Add { name: vec!["Arif".into()] });
        run(&mut ctx, Commands::Add { name: vec!["Babu".into()] });
        run(&mut ctx, Commands::Remove { name: vec!["Babu".into()] });

        let text = run(&mut ctx, Commands::Add { name: vec!["Chandan".into()] });
        assert_eq!(text, "added Chandan as slot 162\n");
    }

    #[test]
    fn name_with_no_words_clears() {
        let mut ctx = context(ActivationPolicy::Toggle);
        run(&mut ctx, Commands::Name { number: 4, name: vec!["Rafi".into()] });
        let text = run(&mut ctx, Commands::Name { number: 4, name: vec![] });
        assert_eq!(text, "slot 4: name cleared\n");
        assert!(ctx.store.roster().get(4).is_some_and(|slot| slot.name.is_none()));
    }

    #[test]
    fn listen_applies_every_line() {
        let mut ctx = context(ActivationPolicy::Force);
        let text = run_with_input(&mut ctx, Commands::Listen, "Active 1 2\nadd Mim\nactive 1\n");

        assert_eq!(text.lines().count(), 3);
        assert_eq!(ctx.store.counts().active, 3);
        assert!(ctx.store.roster().contains_name("mim"));
    }

    #[test]
    fn show_json_lists_only_filtered_slots() {
        let mut ctx = context(ActivationPolicy::Toggle);
        run(&mut ctx, Commands::Toggle { numbers: vec![9], to: None });

        let text = run(
            &mut ctx,
            Commands::Show { filter: FilterMode::Active, output: OutputArgs { json: true } },
        );
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(1));
        assert_eq!(parsed[0]["number"], 9);
    }

    #[test]
    fn meta_updates_and_prints() {
        let mut ctx = context(ActivationPolicy::Toggle);
        let text = run(
            &mut ctx,
            Commands::Meta(MetaArgs { manager: Some("Sajid".into()), ..MetaArgs::default() }),
        );
        assert!(text.contains("Sajid"));
        assert_eq!(ctx.store.metadata().manager_name, "Sajid");
    }

    #[test]
    fn config_prints_effective_policy() {
        let mut ctx = context(ActivationPolicy::Force);
        let text = run(&mut ctx, Commands::Config);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["roster"]["activation_policy"], "force");
    }

    #[test]
    fn report_uses_given_date() {
        let mut ctx = context(ActivationPolicy::Toggle);
        run(&mut ctx, Commands::Run { text: vec!["active".into(), "1".into()] });

        let text = run(
            &mut ctx,
            Commands::Report { date: Some("1 May 2025".into()), output: OutputArgs::default() },
        );
        assert!(text.starts_with("Date: 1 May 2025\n"));
        assert!(text.contains("Active: 1   Net meal: 6"));
    }
}
