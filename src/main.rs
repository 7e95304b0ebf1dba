// SPDX-License-Identifier: MPL-2.0
//! Demo feed for the hover message manager.
//!
//! Shows one message per severity, prints every snapshot the store
//! publishes, dismisses the loading message after a moment and exits once
//! the list is empty.

use hover_messages::config::{self, Config};
use hover_messages::diagnostics::{BufferCapacity, DiagnosticsCollector};
use hover_messages::ui::notifications::{
    Manager, NotificationMessage, Scheduler, Snapshot, TimerEvent, Timings, Toast, TokioScheduler,
    Unscheduled,
};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;

/// How long the demo "works" before closing its loading message.
const LOADING_DURATION: Duration = Duration::from_millis(1_500);

struct Flags {
    config_path: Option<PathBuf>,
    no_timers: bool,
    text: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        config_path: args.opt_value_from_str("--config")?,
        no_timers: args.contains("--no-timers"),
        text: args.opt_value_from_str("--text")?,
    };

    let config = match &flags.config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    let timings = Timings::from_config(&config.notifications);
    let mut collector = DiagnosticsCollector::new(diagnostics_capacity(&config));

    if flags.no_timers {
        let mut manager = Manager::with_timings(Unscheduled, timings);
        manager.set_diagnostics(collector.handle());
        run_synchronous(&mut manager, flags.text);
    } else {
        let (scheduler, timers) = TokioScheduler::new();
        let mut manager = Manager::with_timings(scheduler, timings);
        manager.set_diagnostics(collector.handle());
        run_timed(&mut manager, timers, flags.text).await;
    }

    collector.process_pending();
    println!("-- {} lifecycle events recorded", collector.len());
    for event in collector.events() {
        println!("{} {:?}", event.recorded_at.format("%H:%M:%S%.3f"), event.kind);
    }
    Ok(())
}

fn diagnostics_capacity(config: &Config) -> BufferCapacity {
    config
        .diagnostics
        .buffer_capacity
        .map(BufferCapacity::new)
        .unwrap_or_default()
}

fn show_demo_messages<S: Scheduler>(manager: &mut Manager<S>, text: Option<String>) {
    manager.system("Workspace synced");
    manager.notify("3 new comments on your board");
    manager.warn("Analysis quota at 90%");
    if let Some(text) = text {
        manager.notify(text);
    }
}

/// Without timers nothing expires; dismiss everything by hand.
fn run_synchronous(manager: &mut Manager<Unscheduled>, text: Option<String>) {
    let loading = manager.loading("Analysing report…");
    show_demo_messages(manager, text);
    print_snapshot(&manager.snapshot());

    manager.dismiss(loading);
    print_snapshot(&manager.snapshot());

    manager.clear_all();
    print_snapshot(&manager.snapshot());
}

async fn run_timed(
    manager: &mut Manager<TokioScheduler>,
    mut timers: UnboundedReceiver<TimerEvent>,
    text: Option<String>,
) {
    let mut feed = manager.subscribe();
    let loading = manager.loading("Analysing report…");
    show_demo_messages(manager, text);

    let work = tokio::time::sleep(LOADING_DURATION);
    tokio::pin!(work);
    let mut loading_open = true;

    loop {
        tokio::select! {
            Some(event) = timers.recv() => {
                manager.handle_message(&NotificationMessage::Timer(event));
            }
            () = &mut work, if loading_open => {
                loading_open = false;
                manager.handle_message(&NotificationMessage::Dismiss(loading));
            }
            changed = feed.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = feed.borrow_and_update().clone();
                print_snapshot(&snapshot);
                if snapshot.is_empty() && !loading_open {
                    break;
                }
            }
        }
    }
}

fn print_snapshot(snapshot: &Snapshot) {
    println!("-- {} message(s)", snapshot.len());
    for toast in Toast::view_overlay(snapshot) {
        println!(
            "  #{:<3} [{:<12}] {:<9} {}{}",
            toast.id.value(),
            toast.severity.as_str(),
            toast.live.as_str(),
            toast.text,
            if toast.dismissing { " (closing)" } else { "" },
        );
    }
}
