//! Integration tests for the connection decision procedure.

mod helpers;

use helpers::*;

// ---------------------------------------------------------------------------
// Endpoint existence
// ---------------------------------------------------------------------------

#[test]
fn missing_source_rejected() {
    let nodes = vec![node("strm1", "stream")];
    let verdict = check("ghost", "strm1", &nodes, &[]);
    assert_rejected(&verdict, "Source element 'ghost' does not exist");
}

#[test]
fn missing_target_rejected() {
    let nodes = vec![node("strm1", "stream")];
    let verdict = check("strm1", "ghost", &nodes, &[]);
    assert_rejected(&verdict, "Target element 'ghost' does not exist");
}

#[test]
fn both_endpoints_missing_reports_source_first() {
    let verdict = check("a", "b", &[], &[]);
    assert_rejected(&verdict, "Source element 'a' does not exist");
}

// ---------------------------------------------------------------------------
// Unknown types are fail-closed
// ---------------------------------------------------------------------------

#[test]
fn unrecognized_source_type_rejected() {
    let nodes = vec![node("w1", "widget"), node("strm1", "stream")];
    let verdict = check("w1", "strm1", &nodes, &[]);
    assert_rejected(&verdict, "unrecognized type 'widget'");
}

#[test]
fn unrecognized_target_type_rejected() {
    let nodes = vec![node("strm1", "stream"), node("w1", "widget")];
    let verdict = check("strm1", "w1", &nodes, &[]);
    assert_rejected(&verdict, "unrecognized type 'widget'");
}

// ---------------------------------------------------------------------------
// Capacity bounds
// ---------------------------------------------------------------------------

#[test]
fn source_limited_to_one_output() {
    let nodes = vec![
        node("src1", "source"),
        node("strm1", "stream"),
        node("strm2", "stream"),
    ];
    let edges = vec![edge("src1", "strm1")];
    let verdict = check("src1", "strm2", &nodes, &edges);
    assert_rejected(&verdict, "Source can only have 1 output connection");
}

#[test]
fn join_limited_to_two_inputs() {
    // Scenario C: two prior edges already target the join.
    let nodes = vec![
        node("strm1", "stream"),
        node("strm2", "stream"),
        node("strm3", "stream"),
        node("join1", "join"),
    ];
    let edges = vec![edge("strm1", "join1"), edge("strm2", "join1")];
    let verdict = check("strm3", "join1", &nodes, &edges);
    assert_rejected(&verdict, "Join can only have 2 input connections");
}

#[test]
fn join_accepts_second_input() {
    let nodes = vec![
        node("strm1", "stream"),
        node("strm2", "stream"),
        node("join1", "join"),
    ];
    let edges = vec![edge("strm1", "join1")];
    assert_admitted(&check("strm2", "join1", &nodes, &edges));
}

#[test]
fn trigger_rejects_any_input() {
    let nodes = vec![node("strm1", "stream"), node("t1", "trigger")];
    let verdict = check("strm1", "t1", &nodes, &[]);
    assert_rejected(&verdict, "Trigger cannot have input connections");
}

#[test]
fn sink_rejects_any_output() {
    let nodes = vec![node("sink1", "sink"), node("strm1", "stream")];
    let verdict = check("sink1", "strm1", &nodes, &[]);
    assert_rejected(&verdict, "Sink cannot have output connections");
}

// ---------------------------------------------------------------------------
// Whitelists
// ---------------------------------------------------------------------------

#[test]
fn source_connects_only_to_streams() {
    let nodes = vec![node("src1", "source"), node("filter1", "filter")];
    let verdict = check("src1", "filter1", &nodes, &[]);
    assert_rejected(&verdict, "Source cannot connect to Filter");
}

#[test]
fn sink_accepts_only_streams() {
    let nodes = vec![node("filter1", "filter"), node("sink1", "sink")];
    let verdict = check("filter1", "sink1", &nodes, &[]);
    assert_rejected(&verdict, "Sink cannot accept a connection from Filter");
}

#[test]
fn table_feeds_only_joins() {
    let nodes = vec![node("tbl1", "table"), node("filter1", "filter")];
    let verdict = check("tbl1", "filter1", &nodes, &[]);
    assert_rejected(&verdict, "Table cannot connect to Filter");
}

#[test]
fn table_to_join_admitted() {
    let nodes = vec![node("tbl1", "table"), node("join1", "join")];
    assert_admitted(&check("tbl1", "join1", &nodes, &[]));
}

/// Capacity violations are reported before whitelist violations: a source
/// at its output bound aiming at a forbidden target gets the capacity
/// reason. The ordering is intentional, not incidental.
#[test]
fn capacity_reported_before_whitelist() {
    let nodes = vec![
        node("src1", "source"),
        node("strm1", "stream"),
        node("filter1", "filter"),
    ];
    let edges = vec![edge("src1", "strm1")];
    let verdict = check("src1", "filter1", &nodes, &edges);
    assert_rejected(&verdict, "Source can only have 1 output connection");
}

// ---------------------------------------------------------------------------
// Duplicates
// ---------------------------------------------------------------------------

#[test]
fn duplicate_edge_rejected() {
    let nodes = vec![node("strm1", "stream"), node("filter1", "filter")];
    let edges = vec![edge("strm1", "filter1")];
    let verdict = check("strm1", "filter1", &nodes, &edges);
    assert_rejected(&verdict, "already connected");
}

/// A committed edge counts toward its endpoints' bounds, but resubmitting
/// it must still read as a duplicate, not as exhausted capacity — on the
/// output side (Source, one output) and the input side (Window, one input)
/// alike.
#[test]
fn duplicate_reported_before_capacity() {
    let nodes = vec![
        node("src1", "source"),
        node("strm1", "stream"),
        node("win1", "window"),
    ];
    let edges = vec![edge("src1", "strm1"), edge("strm1", "win1")];

    assert_rejected(&check("src1", "strm1", &nodes, &edges), "already connected");
    assert_rejected(&check("strm1", "win1", &nodes, &edges), "already connected");
}

/// Any accepted edge, once committed, is rejected on resubmission.
#[test]
fn accepted_edge_rejects_resubmission() {
    let nodes = vec![node("strm1", "stream"), node("win1", "window")];
    let mut edges = Vec::new();

    let first = check("strm1", "win1", &nodes, &edges);
    assert_admitted(&first);
    edges.push(edge("strm1", "win1"));

    let second = check("strm1", "win1", &nodes, &edges);
    assert_rejected(&second, "already connected");
}

// ---------------------------------------------------------------------------
// Connector exclusivity on streams
// ---------------------------------------------------------------------------

/// Scenario A: first source admits, resubmit is a duplicate, and a second
/// source is refused because the stream already has one.
#[test]
fn stream_pairs_with_at_most_one_source() {
    let nodes = vec![
        node("src1", "source"),
        node("src2", "source"),
        node("strm1", "stream"),
    ];
    let mut edges = Vec::new();

    assert_admitted(&check("src1", "strm1", &nodes, &edges));
    edges.push(edge("src1", "strm1"));

    assert_rejected(&check("src1", "strm1", &nodes, &edges), "already connected");
    assert_rejected(
        &check("src2", "strm1", &nodes, &edges),
        "already has a Source connected",
    );
}

/// Scenario B: a stream feeding a sink refuses a source, and vice versa.
#[test]
fn stream_with_sink_refuses_source() {
    let nodes = vec![
        node("src1", "source"),
        node("sink1", "sink"),
        node("strm1", "stream"),
    ];
    let edges = vec![edge("strm1", "sink1")];
    let verdict = check("src1", "strm1", &nodes, &edges);
    assert_rejected(&verdict, "already has a Sink connected");
}

#[test]
fn stream_with_source_refuses_sink() {
    let nodes = vec![
        node("src1", "source"),
        node("sink1", "sink"),
        node("strm1", "stream"),
    ];
    let edges = vec![edge("src1", "strm1")];
    let verdict = check("strm1", "sink1", &nodes, &edges);
    assert_rejected(&verdict, "already has a Source connected");
}

#[test]
fn stream_refuses_second_sink() {
    let nodes = vec![
        node("sink1", "sink"),
        node("sink2", "sink"),
        node("strm1", "stream"),
    ];
    let edges = vec![edge("strm1", "sink1")];
    let verdict = check("strm1", "sink2", &nodes, &edges);
    assert_rejected(&verdict, "already has a Sink connected");
}

/// The exclusivity rule only binds connectors; ordinary stages may keep
/// attaching to a stream that already has its connector.
#[test]
fn stages_still_attach_to_connected_stream() {
    let nodes = vec![
        node("src1", "source"),
        node("strm1", "stream"),
        node("filter1", "filter"),
    ];
    let edges = vec![edge("src1", "strm1")];
    assert_admitted(&check("strm1", "filter1", &nodes, &edges));
}

// ---------------------------------------------------------------------------
// Self-loops
// ---------------------------------------------------------------------------

#[test]
fn self_loop_rejected() {
    // Scenario D.
    let nodes = vec![node("filter1", "filter")];
    let verdict = check("filter1", "filter1", &nodes, &[]);
    assert_rejected(&verdict, "Cannot connect an element to itself");
}

#[test]
fn self_loop_rejected_for_unbounded_types() {
    let nodes = vec![node("strm1", "stream")];
    let verdict = check("strm1", "strm1", &nodes, &[]);
    assert_rejected(&verdict, "Cannot connect an element to itself");
}

// ---------------------------------------------------------------------------
// Commit sequences
// ---------------------------------------------------------------------------

/// Committing one accepted edge at a time can never leave a bounded-output
/// node over its bound.
#[test]
fn bounded_source_never_exceeds_one_committed_output() {
    let nodes = vec![
        node("src1", "source"),
        node("strm1", "stream"),
        node("strm2", "stream"),
        node("strm3", "stream"),
    ];
    let mut edges = Vec::new();

    for target in ["strm1", "strm2", "strm3"] {
        let verdict = check("src1", target, &nodes, &edges);
        if verdict.valid {
            edges.push(edge("src1", target));
        }
    }

    assert_eq!(edges.len(), 1, "Only the first connection may commit");
    assert_eq!(edges[0], edge("src1", "strm1"));
}

#[test]
fn linear_pipeline_builds_end_to_end() {
    let nodes = vec![
        node("src1", "source"),
        node("strm1", "stream"),
        node("filter1", "filter"),
        node("strm2", "stream"),
        node("sink1", "sink"),
    ];
    let mut edges = Vec::new();

    for (s, t) in [
        ("src1", "strm1"),
        ("strm1", "filter1"),
        ("filter1", "strm2"),
        ("strm2", "sink1"),
    ] {
        let verdict = check(s, t, &nodes, &edges);
        assert_admitted(&verdict);
        edges.push(edge(s, t));
    }
}
