//! Agent pool assignment and busy-time accounting tests.

use call_center_sim_core_rs::{AgentError, AgentPool, AgentState};

#[test]
fn test_pool_starts_fully_idle() {
    let pool = AgentPool::new(4);
    assert_eq!(pool.len(), 4);
    assert_eq!(pool.first_idle(), Some(0));
    assert_eq!(pool.total_busy_minutes(), 0);

    for (i, agent) in pool.agents().iter().enumerate() {
        assert_eq!(agent.id(), i);
        assert_eq!(agent.state(), AgentState::Idle);
    }
}

#[test]
fn test_assignment_scan_is_lowest_id_first() {
    let mut pool = AgentPool::new(3);

    // Fill the pool in scan order.
    for expected in 0..3 {
        let id = pool.first_idle().unwrap();
        assert_eq!(id, expected);
        pool.agent_mut(id).begin_call(5).unwrap();
    }
    assert_eq!(pool.first_idle(), None);

    // Freeing agent 2 then agent 0 must hand out 0 first again.
    pool.agent_mut(2).finish_call().unwrap();
    pool.agent_mut(0).finish_call().unwrap();
    assert_eq!(pool.first_idle(), Some(0));
}

#[test]
fn test_busy_time_is_reserved_at_assignment() {
    let mut pool = AgentPool::new(1);
    pool.agent_mut(0).begin_call(9).unwrap();

    // Full duration counted before the call completes.
    assert_eq!(pool.total_busy_minutes(), 9);
    pool.agent_mut(0).finish_call().unwrap();
    assert_eq!(pool.total_busy_minutes(), 9);
}

#[test]
fn test_double_assignment_is_rejected() {
    let mut pool = AgentPool::new(1);
    pool.agent_mut(0).begin_call(2).unwrap();

    assert_eq!(
        pool.agent_mut(0).begin_call(2),
        Err(AgentError::AlreadyBusy { id: 0 })
    );
}

#[test]
fn test_finish_without_call_is_rejected() {
    let mut pool = AgentPool::new(2);
    assert_eq!(
        pool.agent_mut(1).finish_call(),
        Err(AgentError::NotBusy { id: 1 })
    );
}

#[test]
fn test_zero_duration_call_counts_nothing_but_occupies_agent() {
    // An instantaneous service sample is valid: the agent is busy until
    // its completion event fires, but reserves zero minutes.
    let mut pool = AgentPool::new(1);
    pool.agent_mut(0).begin_call(0).unwrap();

    assert!(!pool.agent(0).is_idle());
    assert_eq!(pool.total_busy_minutes(), 0);
}
