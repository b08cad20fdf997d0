use clap::Args;
use dehix_hire::config::HireConfig;
use dehix_hire::error::AppError;
use dehix_hire::pipeline::{
    ConnectsLedger, Decision, FreelancerProfile, HireRequestDraft, HireRequestStatus, Invitation,
    LobbySeed, PipelineError, StatusPatch,
};

use crate::infra::build_stack;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Opening connects balance for the demo business
    #[arg(long, default_value_t = 500)]
    pub(crate) connects: u32,
    /// Connects debited when the hire request is created
    #[arg(long, default_value_t = 50)]
    pub(crate) creation_cost: u32,
}

/// CLI walkthrough of the hire pipeline: create, seed the lobby, invite,
/// select one candidate and reject the other, then approve the request and
/// show the notifications that produced.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let business = "acme-studios";
    let stack = build_stack(HireConfig {
        creation_cost: args.creation_cost,
    });

    stack.ledger.open_account(business, args.connects);
    stack.directory.register(FreelancerProfile {
        id: "free-001".to_string(),
        user_name: "aarav.sharma".to_string(),
        email: "aarav@example.com".to_string(),
    });
    stack.directory.register(FreelancerProfile {
        id: "free-002".to_string(),
        user_name: "meera.patel".to_string(),
        email: "meera@example.com".to_string(),
    });

    println!("== Dehix hire pipeline demo ==");
    println!(
        "business {business} opens with {} connects; creation costs {}",
        args.connects, args.creation_cost
    );

    let request = stack
        .service
        .create(
            business,
            HireRequestDraft {
                domain_id: None,
                domain_name: None,
                skill_id: Some("skill-rust".to_string()),
                skill_name: Some("Rust".to_string()),
                description: "Backend engineer for the marketplace team".to_string(),
                experience: "5+ years".to_string(),
                freelancer_required: 1,
                status: Default::default(),
                visible: true,
                bookmarked: false,
            },
        )?;
    let balance = stack
        .ledger
        .balance(business)
        .map_err(PipelineError::Ledger)?;
    println!(
        "created hire request {} for '{}' (balance now {balance})",
        request.id.0, request.skill_name.as_deref().unwrap_or("-")
    );

    stack
        .service
        .add_to_lobby(&LobbySeed {
            hire_request_ids: vec![request.id.0.clone()],
            freelancer_id: "free-001".to_string(),
            dehix_talent_ids: vec!["talent-rust-001".to_string()],
        })?;
    stack
        .service
        .add_to_lobby(&LobbySeed {
            hire_request_ids: vec![request.id.0.clone()],
            freelancer_id: "free-002".to_string(),
            dehix_talent_ids: vec!["talent-rust-002".to_string()],
        })?;
    println!("seeded the lobby with free-001 and free-002");

    for freelancer in ["free-001", "free-002"] {
        stack
            .service
            .invite(
                &request.id,
                Invitation {
                    freelancer_id: freelancer.to_string(),
                    dehix_talent_id: format!("talent-rust-{}", &freelancer[5..]),
                    status: Default::default(),
                },
            )?;
        println!("invited {freelancer}");
    }

    stack
        .service
        .select(
            &request.id,
            Decision {
                freelancer_id: "free-001".to_string(),
                dehix_talent_id: "talent-rust-001".to_string(),
            },
        )?;
    println!("selected free-001");

    stack
        .service
        .reject(
            &request.id,
            Decision {
                freelancer_id: "free-002".to_string(),
                dehix_talent_id: "talent-rust-002".to_string(),
            },
        )?;
    println!("rejected free-002");

    let approved = stack
        .service
        .patch_status(
            business,
            &request.id,
            StatusPatch {
                status: Some(HireRequestStatus::Approved),
                visible: None,
            },
        )?;
    println!("request status is now {}", approved.status.label());

    println!("-- notifications --");
    for event in stack.sink.events() {
        println!("  [{}] {} -> {:?}", event.entity, event.message, event.recipients);
    }

    println!("-- candidate audit trail --");
    println!(
        "  lobby {} / invited {} / selected {} / rejected {}",
        approved.freelancer_in_lobby.len(),
        approved.freelancer_invited.len(),
        approved.freelancer_selected.len(),
        approved.freelancer_rejected.len()
    );

    Ok(())
}
