//! Integration test harness for the gnomon workspace.

mod helpers;

mod cache_decorator;
mod planner_flow;
mod render_smoke;
