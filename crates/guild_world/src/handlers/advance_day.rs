//! The day-advancement pipeline.
//!
//! Phase order is fixed and RNG draws happen only where a phase says they
//! do; reordering anything here breaks replay for existing seeds:
//!
//!   1. day start          5. pickup (no RNG)
//!   2. inbox generation   6. WIP advance + resolution
//!   3. hero arrivals      7. stability drift
//!   4. inbox auto-resolve 8. tax          9. day end

use crate::balance::{
    clamp_percent, difficulty_base, draft_title, flow_multiplier, hero_name, hero_power,
    AUTO_RESOLVE_BAD_STABILITY_PENALTY, AUTO_RESOLVE_DELAY_DAYS, AUTO_RESOLVE_RETRY_DAYS,
    DAYS_INIT,
};
use crate::event::{DaySnapshot, EventKind, SeqContext};
use crate::ids::{ActiveContractId, ContractId, HeroId};
use crate::policies::{
    advance_wip, assess_theft, choose_contract, compute_close_delta, day_stability_delta,
    draw_bucket, evaluate_end_of_day, record_successful_close, resolve_outcome,
    sample_client_deposit_copper, sample_payout_copper, trophies_to_guild, AutoResolveBucket,
    OutcomeDecision, PickupChoice, TaxEvaluation, TheftDecision,
};
use crate::rng::Rng;
use crate::state::{
    insert_by_key, ActiveContract, ActiveStatus, BoardStatus, ContractDraft, GameState, Hero,
    HeroClass, HeroStatus, HeroTraits, Outcome, ProofHint, ReturnPacket, SalvagePolicy,
};

pub(crate) fn handle_advance_day(state: &mut GameState, rng: &mut Rng, ctx: &mut SeqContext) {
    start_day(state, ctx);
    generate_inbox(state, rng, ctx);
    arrive_heroes(state, rng, ctx);
    auto_resolve_inbox(state, rng, ctx);
    run_pickup(state, ctx);
    let (successes, failures) = advance_and_resolve(state, rng, ctx);
    drift_stability(state, successes, failures, ctx);
    evaluate_tax(state, ctx);
    end_day(state, ctx);
}

// ----------------------------------------------------------------------------
// Phase 1
// ----------------------------------------------------------------------------

fn start_day(state: &mut GameState, ctx: &mut SeqContext) {
    state.meta.day_index += 1;
    ctx.day = state.meta.day_index;
    state.heroes.arrivals_today.clear();
    ctx.emit(EventKind::DayStarted {
        day_index: state.meta.day_index,
    });
}

// ----------------------------------------------------------------------------
// Phase 2: three draws per draft: difficulty variance, payout, deposit
// ----------------------------------------------------------------------------

fn generate_inbox(state: &mut GameState, rng: &mut Rng, ctx: &mut SeqContext) {
    let rank = state.guild.guild_rank;
    let day = state.meta.day_index;
    let count = 2 * flow_multiplier(rank);
    let mut contract_ids = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let id = state.meta.ids.alloc_contract_id();
        let variance = rng.next_int(21) as i64 - 10;
        let difficulty = clamp_percent(difficulty_base(rank) + variance);
        let payout = sample_payout_copper(rank, rng);
        let deposit = sample_client_deposit_copper(payout, rng);

        let draft = ContractDraft {
            id,
            created_day: day,
            next_auto_resolve_day: day + AUTO_RESOLVE_DELAY_DAYS,
            title: draft_title(id.0).to_string(),
            rank_suggested: rank,
            fee_offered: payout,
            salvage: SalvagePolicy::Guild,
            base_difficulty: difficulty,
            proof_hint: ProofHint::Trophy,
            client_deposit: deposit,
        };
        insert_by_key(&mut state.contracts.inbox, draft, |d| d.id);
        contract_ids.push(id);
    }

    ctx.emit(EventKind::InboxGenerated {
        count,
        contract_ids,
    });
}

// ----------------------------------------------------------------------------
// Phase 3: five draws per hero: name, class, greed, honesty, courage
// ----------------------------------------------------------------------------

fn arrive_heroes(state: &mut GameState, rng: &mut Rng, ctx: &mut SeqContext) {
    let rank = state.guild.guild_rank;
    let count = 2 * flow_multiplier(rank);
    let mut hero_ids = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let id = state.meta.ids.alloc_hero_id();
        let name_index = rng.next_int(20) as i64;
        let class = HeroClass::from_draw(rng.next_int(HeroClass::COUNT));
        let greed = rng.next_int(101) as i64;
        let honesty = rng.next_int(101) as i64;
        let courage = rng.next_int(101) as i64;

        let hero = Hero {
            id,
            name: hero_name(name_index).to_string(),
            rank,
            class,
            traits: HeroTraits {
                greed,
                honesty,
                courage,
            },
            status: HeroStatus::Available,
            history_completed: 0,
        };
        insert_by_key(&mut state.heroes.roster, hero, |h| h.id);
        state.heroes.arrivals_today.push(id);
        hero_ids.push(id);
    }

    ctx.emit(EventKind::HeroesArrived { count, hero_ids });
}

// ----------------------------------------------------------------------------
// Phase 4: one draw per due draft
// ----------------------------------------------------------------------------

fn auto_resolve_inbox(state: &mut GameState, rng: &mut Rng, ctx: &mut SeqContext) {
    let day = state.meta.day_index;
    let due_ids: Vec<ContractId> = state
        .contracts
        .inbox
        .iter()
        .filter(|draft| draft.next_auto_resolve_day <= day)
        .map(|draft| draft.id)
        .collect();

    let mut penalty = 0;
    for draft_id in due_ids {
        let bucket = draw_bucket(rng);
        match bucket {
            AutoResolveBucket::Good => {
                state.contracts.inbox.retain(|d| d.id != draft_id);
            }
            AutoResolveBucket::Neutral => {
                if let Some(draft) = state
                    .contracts
                    .inbox
                    .iter_mut()
                    .find(|d| d.id == draft_id)
                {
                    draft.next_auto_resolve_day = day + AUTO_RESOLVE_RETRY_DAYS;
                }
            }
            AutoResolveBucket::Bad => {
                state.contracts.inbox.retain(|d| d.id != draft_id);
                penalty += AUTO_RESOLVE_BAD_STABILITY_PENALTY;
            }
        }
        ctx.emit(EventKind::ContractAutoResolved { draft_id, bucket });
    }

    if penalty > 0 {
        let previous = state.region.stability;
        let current = clamp_percent(previous - penalty);
        state.region.stability = current;
        ctx.emit(EventKind::StabilityUpdated { previous, current });
    }
}

// ----------------------------------------------------------------------------
// Phase 5: no RNG; arrivals in ascending hero id
// ----------------------------------------------------------------------------

fn run_pickup(state: &mut GameState, ctx: &mut SeqContext) {
    let arrivals = state.heroes.arrivals_today.clone();
    let day = state.meta.day_index;

    for hero_id in arrivals {
        let Some(hero) = state.find_hero(hero_id) else {
            continue;
        };
        if hero.status != HeroStatus::Available {
            continue;
        }

        match choose_contract(hero, &state.contracts.board) {
            PickupChoice::Decline { reason } => {
                ctx.emit(EventKind::HeroDeclined {
                    hero_id,
                    reason: reason.to_string(),
                });
            }
            PickupChoice::Take { board_contract_id } => {
                let active_id = state.meta.ids.alloc_active_contract_id();
                if let Some(item) = state
                    .contracts
                    .board
                    .iter_mut()
                    .find(|b| b.id == board_contract_id)
                {
                    item.status = BoardStatus::Locked;
                }
                let active = ActiveContract {
                    id: active_id,
                    board_contract_id,
                    taken_day: day,
                    days_remaining: DAYS_INIT,
                    hero_ids: vec![hero_id],
                    status: ActiveStatus::Wip,
                };
                insert_by_key(&mut state.contracts.active, active, |a| a.id);
                if let Some(hero) = state.heroes.roster.iter_mut().find(|h| h.id == hero_id) {
                    hero.status = HeroStatus::OnMission;
                }
                ctx.emit(EventKind::ContractTaken {
                    active_contract_id: active_id,
                    board_contract_id,
                    hero_id,
                    days_remaining: DAYS_INIT,
                });
            }
        }
    }
}

// ----------------------------------------------------------------------------
// Phase 6: WIP advance, then resolution in ascending active id
// ----------------------------------------------------------------------------

fn advance_and_resolve(
    state: &mut GameState,
    rng: &mut Rng,
    ctx: &mut SeqContext,
) -> (i64, i64) {
    let mut matured: Vec<ActiveContractId> = Vec::new();
    for active in state.contracts.active.iter_mut() {
        if active.status != ActiveStatus::Wip {
            continue;
        }
        let wip = advance_wip(active.days_remaining);
        active.days_remaining = wip.days_remaining;
        ctx.emit(EventKind::WipAdvanced {
            active_contract_id: active.id,
            days_remaining: active.days_remaining,
        });
        if wip.matured {
            matured.push(active.id);
        }
    }

    let mut successes = 0;
    let mut failures = 0;
    for active_id in matured {
        match resolve_one(state, active_id, rng, ctx) {
            Resolution::AutoClosedSuccess => successes += 1,
            Resolution::AutoClosedFailure => failures += 1,
            Resolution::AwaitingClose | Resolution::Skipped => {}
        }
    }
    (successes, failures)
}

enum Resolution {
    AutoClosedSuccess,
    AutoClosedFailure,
    AwaitingClose,
    Skipped,
}

fn resolve_one(
    state: &mut GameState,
    active_id: ActiveContractId,
    rng: &mut Rng,
    ctx: &mut SeqContext,
) -> Resolution {
    let Some(active) = state.find_active(active_id) else {
        return Resolution::Skipped;
    };
    let board_id = active.board_contract_id;
    let Some(&hero_id) = active.hero_ids.first() else {
        return Resolution::Skipped;
    };
    let Some(item) = state.find_board(board_id) else {
        return Resolution::Skipped;
    };
    let (fee, deposit, salvage, difficulty) = (
        item.fee,
        item.client_deposit,
        item.salvage,
        item.base_difficulty,
    );
    let Some(hero) = state.find_hero(hero_id) else {
        return Resolution::Skipped;
    };
    let power = hero_power(hero);
    let (greed, honesty) = (hero.traits.greed, hero.traits.honesty);

    let decision = resolve_outcome(power, difficulty, rng);
    let theft = assess_theft(
        decision.outcome,
        decision.trophies_count,
        salvage,
        fee,
        greed,
        honesty,
        rng,
    );

    if theft.suspected {
        ctx.emit(EventKind::TrophyTheftSuspected {
            active_contract_id: active_id,
            hero_id,
            stolen_count: theft.stolen_count,
            reported_count: theft.reported_count,
        });
    }
    ctx.emit(EventKind::ContractResolved {
        active_contract_id: active_id,
        board_contract_id: board_id,
        outcome: decision.outcome,
        trophies_count: theft.reported_count,
        trophies_quality: decision.trophies_quality,
    });

    if decision.outcome == Outcome::Partial {
        park_partial_return(state, active_id, board_id, hero_id, &decision, &theft);
        return Resolution::AwaitingClose;
    }

    // Auto-close everything else.
    if decision.outcome.removes_hero() {
        ctx.emit(EventKind::HeroDied {
            hero_id,
            outcome: decision.outcome,
        });
        state.heroes.roster.retain(|h| h.id != hero_id);
    } else if let Some(hero) = state.heroes.roster.iter_mut().find(|h| h.id == hero_id) {
        hero.status = HeroStatus::Available;
        if decision.outcome == Outcome::Success {
            hero.history_completed += 1;
        }
    }

    let success = decision.outcome == Outcome::Success;
    let fee_paid = if success { fee } else { 0 };
    let guild_trophies = if success {
        trophies_to_guild(salvage, theft.reported_count)
    } else {
        0
    };
    super::apply_economy_delta(
        state,
        compute_close_delta(success, fee, deposit, guild_trophies),
    );
    super::close_active(state, active_id);

    if success {
        let progress = record_successful_close(
            state.guild.guild_rank,
            state.guild.completed_contracts_total,
        );
        state.guild.completed_contracts_total = progress.new_total;
        state.guild.guild_rank = progress.new_rank;
        state.guild.contracts_for_next_rank = progress.contracts_for_next_rank;
        if progress.ranked_up {
            ctx.emit(EventKind::GuildRankUp {
                new_rank: progress.new_rank,
                contracts_for_next_rank: progress.contracts_for_next_rank,
            });
        }
    }

    ctx.emit(EventKind::ReturnClosed {
        active_contract_id: active_id,
        board_contract_id: board_id,
        outcome: decision.outcome,
        fee_paid,
        trophies_to_guild: guild_trophies,
        manual_close: false,
    });

    if success {
        Resolution::AutoClosedSuccess
    } else {
        Resolution::AutoClosedFailure
    }
}

fn park_partial_return(
    state: &mut GameState,
    active_id: ActiveContractId,
    board_id: ContractId,
    hero_id: HeroId,
    decision: &OutcomeDecision,
    theft: &TheftDecision,
) {
    let mut reason_tags = vec!["partial_objectives".to_string()];
    if theft.suspected {
        reason_tags.push("theft_suspected".to_string());
    }
    let packet = ReturnPacket {
        active_contract_id: active_id,
        board_contract_id: board_id,
        hero_ids: vec![hero_id],
        resolved_day: state.meta.day_index,
        outcome: decision.outcome,
        trophies_count: theft.reported_count,
        trophies_quality: decision.trophies_quality,
        reason_tags,
        requires_player_close: true,
        suspected_theft: theft.suspected,
    };
    insert_by_key(&mut state.contracts.returns, packet, |r| {
        r.active_contract_id
    });
    if let Some(active) = state
        .contracts
        .active
        .iter_mut()
        .find(|a| a.id == active_id)
    {
        active.status = ActiveStatus::ReturnReady;
    }
}

// ----------------------------------------------------------------------------
// Phase 7
// ----------------------------------------------------------------------------

fn drift_stability(state: &mut GameState, successes: i64, failures: i64, ctx: &mut SeqContext) {
    let delta = day_stability_delta(successes, failures);
    if delta == 0 {
        return;
    }
    let previous = state.region.stability;
    let current = clamp_percent(previous + delta);
    if current == previous {
        return;
    }
    state.region.stability = current;
    ctx.emit(EventKind::StabilityUpdated { previous, current });
}

// ----------------------------------------------------------------------------
// Phase 8
// ----------------------------------------------------------------------------

fn evaluate_tax(state: &mut GameState, ctx: &mut SeqContext) {
    let evaluation = evaluate_end_of_day(
        state.meta.day_index,
        state.meta.tax_due_day,
        state.meta.tax_amount_due,
        state.meta.tax_penalty,
        state.meta.tax_missed_count,
        state.guild.guild_rank,
    );
    match evaluation {
        TaxEvaluation::NotDue => {}
        TaxEvaluation::Missed {
            penalty_added,
            missed_count,
            shutdown,
            next_due_day,
        } => {
            state.meta.tax_penalty += penalty_added;
            state.meta.tax_missed_count = missed_count;
            state.meta.tax_due_day = next_due_day;
            ctx.emit(EventKind::TaxMissed {
                penalty_added,
                missed_count,
            });
            if shutdown {
                ctx.emit(EventKind::GuildShutdown {
                    reason: "tax_evasion".to_string(),
                });
            }
        }
        TaxEvaluation::Scheduled {
            amount_due,
            next_due_day,
        } => {
            state.meta.tax_amount_due = amount_due;
            state.meta.tax_due_day = next_due_day;
            ctx.emit(EventKind::TaxDue {
                due_day: next_due_day,
                amount_due,
            });
        }
    }
}

// ----------------------------------------------------------------------------
// Phase 9
// ----------------------------------------------------------------------------

fn end_day(state: &mut GameState, ctx: &mut SeqContext) {
    let snapshot = DaySnapshot {
        day: state.meta.day_index,
        revision: state.meta.revision,
        money_copper: state.economy.money_copper,
        trophies_stock: state.economy.trophies_stock,
        stability: state.region.stability,
        reputation: state.guild.reputation,
        inbox_count: state.contracts.inbox.len() as i64,
        board_count: state.contracts.board.len() as i64,
        active_wip_count: state
            .contracts
            .active
            .iter()
            .filter(|a| a.status == ActiveStatus::Wip)
            .count() as i64,
        returns_awaiting_close: state
            .contracts
            .returns
            .iter()
            .filter(|r| r.requires_player_close)
            .count() as i64,
    };
    ctx.emit(EventKind::DayEnded { snapshot });
}
