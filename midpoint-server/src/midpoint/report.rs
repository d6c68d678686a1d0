//! Plain-text rendering of a midpoint evaluation.

use super::aggregate::{Candidate, Evaluation};
use super::correction::CorrectedReport;

/// Render one candidate with each traveler's time, correction and path.
pub fn render_candidate(title: &str, candidate: &Candidate, evaluation: &Evaluation) -> String {
    let routes = evaluation.routes_to(candidate);
    let corrected = CorrectedReport::from_routes(&routes);
    let stats = &candidate.stats;

    let mut out = format!(
        "== {title}\nMeeting station: {}\nTotal time (raw): {}min\nMean: {:.2}min, stddev: {:.2}min\n",
        candidate.station, stats.total, stats.mean, stats.stddev
    );

    for (i, (route, fix)) in routes.iter().zip(&corrected.routes).enumerate() {
        let path: Vec<&str> = route.path.iter().map(|s| s.as_str()).collect();
        out.push_str(&format!(
            "\nTraveler {}: {}\nTime: {} + correction {}min -> {}\nPath: {}\n",
            i + 1,
            route.start,
            route.time,
            fix.penalty,
            fix.corrected,
            path.join(" -> ")
        ));
    }

    out.push_str(&format!(
        "\nCorrected total: {}min, mean: {:.2}min, stddev: {:.2}min\n",
        corrected.stats.total, corrected.stats.mean, corrected.stats.stddev
    ));

    out
}

/// Render both rankings, total first.
pub fn render_evaluation(evaluation: &Evaluation) -> String {
    if !evaluation.is_feasible() {
        return "No feasible midpoint: no station is reachable from every start.\n".to_string();
    }

    let mut out = render_candidate("Minimum total travel time", evaluation.by_total(), evaluation);
    out.push_str(&"-".repeat(50));
    out.push('\n');
    out.push_str(&render_candidate(
        "Balanced travel time (stddev + mean)",
        evaluation.by_balance(),
        evaluation,
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;
    use crate::graph::GraphBuilder;
    use crate::midpoint::evaluate;

    #[test]
    fn renders_symmetric_scenario() {
        let graph = GraphBuilder::new()
            .link("A", "B", 5.0)
            .link("B", "C", 5.0)
            .link("A", "C", 20.0)
            .build();
        let eval = evaluate(&graph, &[StationId::from("A"), StationId::from("C")]).unwrap();

        let text = render_candidate("Total", eval.by_total(), &eval);

        assert!(text.starts_with("== Total\n"));
        assert!(text.contains("Meeting station: B\n"));
        assert!(text.contains("Total time (raw): 10min\n"));
        assert!(text.contains("Mean: 5.00min, stddev: 0.00min\n"));
        assert!(text.contains("Traveler 1: A\n"));
        assert!(text.contains("Time: 5min + correction 0min -> 5min\n"));
        assert!(text.contains("Path: A -> B\n"));
        assert!(text.contains("Path: C -> B\n"));
        assert!(text.contains("Corrected total: 10min, mean: 5.00min, stddev: 0.00min\n"));
    }

    #[test]
    fn renders_exact_layout() {
        let graph = GraphBuilder::new().link("A", "B", 3.0).build();
        let eval = evaluate(&graph, &[StationId::from("A"), StationId::from("B")]).unwrap();

        assert_eq!(
            render_candidate("Total", eval.by_total(), &eval),
            "== Total\n\
             Meeting station: A\n\
             Total time (raw): 3min\n\
             Mean: 1.50min, stddev: 1.50min\n\
             \n\
             Traveler 1: A\n\
             Time: 0min + correction 0min -> 0min\n\
             Path: A\n\
             \n\
             Traveler 2: B\n\
             Time: 3min + correction 0min -> 3min\n\
             Path: B -> A\n\
             \n\
             Corrected total: 3min, mean: 1.50min, stddev: 1.50min\n"
        );
    }

    #[test]
    fn renders_both_rankings() {
        let graph = GraphBuilder::new().link("A", "B", 3.0).build();
        let eval = evaluate(&graph, &[StationId::from("A"), StationId::from("B")]).unwrap();

        let text = render_evaluation(&eval);
        assert!(text.contains("== Minimum total travel time"));
        assert!(text.contains("== Balanced travel time (stddev + mean)"));
    }

    #[test]
    fn reports_infeasible() {
        let graph = GraphBuilder::new()
            .link("A", "B", 1.0)
            .link("X", "Y", 1.0)
            .build();
        let eval = evaluate(&graph, &[StationId::from("A"), StationId::from("X")]).unwrap();

        assert!(render_evaluation(&eval).starts_with("No feasible midpoint"));
    }
}
