//! Scenario tests for the map contract.
//!
//! Cases here run against every `ConcurrentMap` implementation unless they
//! check something only the sharded map promises.


pub mod support;
