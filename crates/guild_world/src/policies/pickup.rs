//! Contract pickup: which open board item (if any) an arriving hero takes.
//! Pure and RNG-free; ties keep the lowest board id.

use crate::balance::{
    hero_power, DECLINE_TOO_RISKY, DECLINE_UNPROFITABLE, PICKUP_FEE_DIVISOR, PICKUP_RISK_BIAS,
    PICKUP_SALVAGE_BONUS_HERO, PICKUP_SALVAGE_BONUS_SPLIT, UNPROFITABLE_FLOOR,
};
use crate::ids::ContractId;
use crate::state::{BoardContract, BoardStatus, Hero, SalvagePolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickupChoice {
    Take { board_contract_id: ContractId },
    Decline { reason: &'static str },
}

fn salvage_bonus(salvage: SalvagePolicy) -> i64 {
    match salvage {
        SalvagePolicy::Guild => 0,
        SalvagePolicy::Hero => PICKUP_SALVAGE_BONUS_HERO,
        SalvagePolicy::Split => PICKUP_SALVAGE_BONUS_SPLIT,
    }
}

/// How appealing a board item looks to a hero. Positive means worth taking.
pub fn attractiveness(hero: &Hero, item: &BoardContract) -> i64 {
    item.fee / PICKUP_FEE_DIVISOR + salvage_bonus(item.salvage) + hero_power(hero)
        - item.base_difficulty
        - PICKUP_RISK_BIAS
}

pub fn choose_contract(hero: &Hero, board: &[BoardContract]) -> PickupChoice {
    let mut best: Option<(i64, ContractId)> = None;
    for item in board {
        if item.status != BoardStatus::Open {
            continue;
        }
        let score = attractiveness(hero, item);
        match best {
            Some((best_score, _)) if best_score >= score => {}
            _ => best = Some((score, item.id)),
        }
    }

    match best {
        None => PickupChoice::Decline {
            reason: DECLINE_UNPROFITABLE,
        },
        Some((score, _)) if score < UNPROFITABLE_FLOOR => PickupChoice::Decline {
            reason: DECLINE_UNPROFITABLE,
        },
        Some((score, _)) if score < 0 => PickupChoice::Decline {
            reason: DECLINE_TOO_RISKY,
        },
        Some((_, board_contract_id)) => PickupChoice::Take { board_contract_id },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{HeroId, Rank};
    use crate::state::{HeroClass, HeroStatus, HeroTraits};

    fn hero(courage: i64) -> Hero {
        Hero {
            id: HeroId(1),
            name: "Kestrel".to_string(),
            rank: Rank::F,
            class: HeroClass::Ranger,
            traits: HeroTraits {
                greed: 50,
                honesty: 50,
                courage,
            },
            status: HeroStatus::Available,
            history_completed: 0,
        }
    }

    fn board_item(id: i64, fee: i64, difficulty: i64, status: BoardStatus) -> BoardContract {
        BoardContract {
            id: ContractId(id),
            posted_day: 1,
            title: "Wolf cull".to_string(),
            rank: Rank::F,
            fee,
            salvage: SalvagePolicy::Guild,
            base_difficulty: difficulty,
            status,
            client_deposit: 0,
        }
    }

    #[test]
    fn empty_board_is_unprofitable() {
        let choice = choose_contract(&hero(80), &[]);
        assert_eq!(
            choice,
            PickupChoice::Decline {
                reason: DECLINE_UNPROFITABLE
            }
        );
    }

    #[test]
    fn locked_items_are_invisible() {
        let board = vec![board_item(1, 100, 0, BoardStatus::Locked)];
        let choice = choose_contract(&hero(80), &board);
        assert!(matches!(choice, PickupChoice::Decline { .. }));
    }

    #[test]
    fn takes_the_highest_score_with_low_id_ties() {
        // Identical items: the first (lowest id) wins.
        let board = vec![
            board_item(3, 100, 10, BoardStatus::Open),
            board_item(5, 100, 10, BoardStatus::Open),
        ];
        let choice = choose_contract(&hero(80), &board);
        assert_eq!(
            choice,
            PickupChoice::Take {
                board_contract_id: ContractId(3)
            }
        );
    }

    #[test]
    fn decline_reasons_split_on_the_floor() {
        // hero_power(courage 0, rank F) = 10.
        // score = fee/2 + 10 - difficulty - 20
        let slightly_bad = vec![board_item(1, 10, 10, BoardStatus::Open)]; // score -15
        assert_eq!(
            choose_contract(&hero(0), &slightly_bad),
            PickupChoice::Decline {
                reason: DECLINE_TOO_RISKY
            }
        );
        let hopeless = vec![board_item(1, 0, 40, BoardStatus::Open)]; // score -50
        assert_eq!(
            choose_contract(&hero(0), &hopeless),
            PickupChoice::Decline {
                reason: DECLINE_UNPROFITABLE
            }
        );
    }
}
