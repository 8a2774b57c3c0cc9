//! Unit tests for description-based routing.

use crate::pipeline::domain::{RoleId, RoutePredicate, RoutingRule, RoutingTable};
use rstest::rstest;

#[rstest]
#[case("Add sidebar link to changelog", RoleId::Frontend)]
#[case("Fix broken LINK in footer", RoleId::Frontend)]
#[case("Polish UI spacing", RoleId::Frontend)]
#[case("Deploy service", RoleId::Release)]
#[case("Deploy test harness", RoleId::Release)]
#[case("Run integration test", RoleId::Backend)]
#[case("Refactor cache layer", RoleId::Optimization)]
#[case("Rebuild docs", RoleId::Frontend)]
#[case("Deploy UI bundle", RoleId::Frontend)]
fn standard_table_routes_in_priority_order(#[case] description: &str, #[case] expected: RoleId) {
    assert_eq!(RoutingTable::standard().route(description), expected);
}

#[rstest]
fn custom_table_falls_back_when_nothing_matches() {
    let table = RoutingTable::new(
        vec![RoutingRule {
            predicate: RoutePredicate::ContainsAny(&["bug"]),
            target: RoleId::Qa,
        }],
        RoleId::Documentation,
    );
    assert_eq!(table.route("Triage BUG reports"), RoleId::Qa);
    assert_eq!(table.route("Write guide"), RoleId::Documentation);
    assert_eq!(table.fallback(), RoleId::Documentation);
    assert_eq!(table.rules().len(), 1);
}

#[rstest]
fn successors_form_a_single_cycle_through_every_role() {
    let mut role = RoleId::LeadArchitect;
    for expected in RoleId::PIPELINE {
        assert_eq!(role, expected);
        role = role.successor();
    }
    assert_eq!(role, RoleId::LeadArchitect);
}

#[rstest]
#[case(RoleId::Backend, "Backend Agent")]
#[case(RoleId::Release, "Release Engineer")]
#[case(RoleId::Qa, "QA Agent")]
fn agent_names_match_display_names(#[case] role: RoleId, #[case] expected: &str) {
    assert_eq!(role.agent_name().as_str(), expected);
    assert_eq!(role.to_string(), expected);
}
