// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # leave-flow - Command-Line Driver
//!
//! Walks leave requests through the approval lifecycle, runs the
//! leave-day calculator, and sends one-off simulated notifications.
//! Everything happens in memory; nothing is persisted and nothing
//! leaves the process.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::eyre};
use leave_flow::{Command as WorkflowCommand, LeaveRequest, OutboundNotification, apply};
use leave_flow_audit::Actor;
use leave_flow_domain::{
    EmployeeId, LeaveDaysResult, LeaveType, RequestId, Seniority, calculate_leave_days,
};
use leave_flow_notify::{
    ChannelKind, NotificationService, NotifierRegistry, NotifyConfig, Priority,
};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Walk a leave request through the approval lifecycle
    #[command(visible_alias = "w")]
    Workflow(WorkflowArgs),

    /// Calculate requested versus available leave days
    #[command(visible_alias = "c")]
    Calc(CalcArgs),

    /// Send a one-off notification on a channel
    #[command(visible_alias = "n")]
    Notify(NotifyArgs),

    /// List the registered notification channels
    Channels,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::Workflow(args) => run_workflow(&args),
            Self::Calc(args) => run_calc(&args),
            Self::Notify(args) => run_notify(&args),
            Self::Channels => run_channels(),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
struct WorkflowArgs {
    /// Employee identifier
    #[arg(long, default_value = "EMP001")]
    employee: String,

    /// Range start (ISO 8601)
    #[arg(long, default_value = "2026-12-20")]
    start: String,

    /// Range end (ISO 8601)
    #[arg(long, default_value = "2026-12-25")]
    end: String,

    /// Leave type tag (CP, RTT, maladie, sans_solde)
    #[arg(long, default_value = "CP")]
    leave_type: String,

    /// Free-text reason
    #[arg(long, default_value = "Christmas holidays")]
    reason: String,

    /// Seniority in whole years
    #[arg(long, default_value_t = 3)]
    seniority_years: u16,

    /// How the reviews should end
    #[arg(long, value_enum, default_value = "approve")]
    outcome: Outcome,

    /// Channel to dispatch emitted notifications on
    #[arg(long, default_value = "console")]
    channel: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Outcome {
    /// Manager and HR both approve
    Approve,
    /// The manager rejects
    ManagerReject,
    /// The manager approves, HR rejects
    HrReject,
    /// The employee cancels after submitting
    Cancel,
}

#[derive(Clone, Debug, clap::Args)]
struct CalcArgs {
    /// Range start (ISO 8601)
    #[arg(long)]
    start: String,

    /// Range end (ISO 8601)
    #[arg(long)]
    end: String,

    /// Leave type tag (CP, RTT, maladie, sans_solde)
    #[arg(long, default_value = "CP")]
    leave_type: String,

    /// Seniority in whole years
    #[arg(long, default_value_t = 0)]
    seniority_years: u16,

    /// Seniority in whole months; overrides --seniority-years when set
    #[arg(long)]
    seniority_months: Option<u16>,
}

#[derive(Clone, Debug, clap::Args)]
struct NotifyArgs {
    /// Channel tag (console, email, sms, push, slack)
    #[arg(long)]
    channel: String,

    /// Recipient address, number, token, or handle
    #[arg(long)]
    recipient: String,

    /// Message text
    #[arg(long)]
    message: String,

    /// Priority tag (low, normal, high, urgent)
    #[arg(long, default_value = "normal")]
    priority: String,
}

/// Fans transition notifications out through the dispatch service.
fn dispatch(
    service: &mut NotificationService,
    notifications: &[OutboundNotification],
    kind: ChannelKind,
) {
    for notification in notifications {
        for recipient in &notification.recipients {
            service.send(recipient, &notification.message, kind, Priority::Normal);
        }
    }
}

fn print_state(request: &LeaveRequest) {
    println!("{request}");
    println!(
        "  available actions: {:?}",
        WorkflowCommand::available_for(request.status)
    );
}

#[allow(clippy::too_many_lines)]
fn run_workflow(args: &WorkflowArgs) -> Result<()> {
    let leave_type: LeaveType = LeaveType::from_str(&args.leave_type)?;
    let channel: ChannelKind = ChannelKind::from_str(&args.channel)?;
    let seniority: Seniority = Seniority::from_years(args.seniority_years);
    let mut service: NotificationService =
        NotificationService::with_defaults(&NotifyConfig::default());

    let employee: Actor = Actor::new(args.employee.clone(), String::from("employee"));
    let manager: Actor = Actor::new(String::from("MGR001"), String::from("manager"));
    let hr: Actor = Actor::new(String::from("HR001"), String::from("hr"));

    println!("--- creating request ---");
    let mut request: LeaveRequest = LeaveRequest::new(
        RequestId::new("req-1"),
        EmployeeId::new(&args.employee),
        args.start.clone(),
        args.end.clone(),
        leave_type,
        args.reason.clone(),
    );
    print_state(&request);

    println!("--- leave-day calculation ---");
    let calc: LeaveDaysResult =
        calculate_leave_days(&args.start, &args.end, leave_type, seniority)?;
    println!(
        "  requested {} day(s), {} available, valid: {}",
        calc.requested_days, calc.available_days, calc.is_valid
    );
    if calc.medical_certificate_required {
        println!("  a medical certificate is required for this request");
    }

    println!("--- review flow ---");
    let steps: Vec<(WorkflowCommand, Actor)> = match args.outcome {
        Outcome::Approve => vec![
            (WorkflowCommand::Submit, employee),
            (WorkflowCommand::StartManagerReview, manager.clone()),
            (
                WorkflowCommand::ManagerApprove {
                    comment: Some(String::from("Fine by me")),
                },
                manager,
            ),
            (
                WorkflowCommand::HrApprove {
                    comment: Some(String::from("Validated, enjoy your leave")),
                },
                hr,
            ),
        ],
        Outcome::ManagerReject => vec![
            (WorkflowCommand::Submit, employee),
            (WorkflowCommand::StartManagerReview, manager.clone()),
            (
                WorkflowCommand::ManagerReject {
                    comment: Some(String::from("Understaffed that week")),
                },
                manager,
            ),
        ],
        Outcome::HrReject => vec![
            (WorkflowCommand::Submit, employee),
            (WorkflowCommand::StartManagerReview, manager.clone()),
            (
                WorkflowCommand::ManagerApprove {
                    comment: Some(String::from("Fine by me")),
                },
                manager,
            ),
            (
                WorkflowCommand::HrReject {
                    comment: Some(String::from("Blackout period")),
                },
                hr,
            ),
        ],
        Outcome::Cancel => vec![
            (WorkflowCommand::Submit, employee.clone()),
            (WorkflowCommand::Cancel, employee),
        ],
    };

    for (command, actor) in steps {
        let name: &str = command.name();
        let result = apply(&request, command, actor)?;
        println!("  {} -> {}", name, result.new_request.status);
        dispatch(&mut service, &result.notifications, channel);
        request = result.new_request;
    }
    print_state(&request);

    println!("--- history ---");
    for entry in request.history.entries() {
        println!(
            "  {} [{}] {} -> {}",
            entry.timestamp, entry.actor.role, entry.action.name, entry.resulting_status
        );
    }

    println!("--- dispatch stats ---");
    println!(
        "  sent: {}, failed: {}",
        service.stats().sent(),
        service.stats().failed()
    );

    Ok(())
}

fn run_calc(args: &CalcArgs) -> Result<()> {
    let leave_type: LeaveType = LeaveType::from_str(&args.leave_type)?;
    let seniority: Seniority = args.seniority_months.map_or_else(
        || Seniority::from_years(args.seniority_years),
        Seniority::from_months,
    );

    let result: LeaveDaysResult =
        calculate_leave_days(&args.start, &args.end, leave_type, seniority)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn run_notify(args: &NotifyArgs) -> Result<()> {
    let channel: ChannelKind = ChannelKind::from_str(&args.channel)?;
    let priority: Priority = Priority::from_str(&args.priority)?;
    let mut service: NotificationService =
        NotificationService::with_defaults(&NotifyConfig::default());

    let delivered: bool = service.send(&args.recipient, &args.message, channel, priority);
    if delivered {
        println!("delivered on {channel}");
        Ok(())
    } else {
        Err(eyre!("notification on {channel} was not delivered"))
    }
}

fn run_channels() -> Result<()> {
    let registry: NotifierRegistry = NotifierRegistry::with_defaults(&NotifyConfig::default());
    for channel in registry.available_channels() {
        println!("{channel}");
    }
    Ok(())
}
