//! # authd
//!
//! `authd` serves the user registration (`/app-one`) and user login
//! (`/app-two`) HTTP APIs for the shop frontend, backed by a shared
//! Postgres `users` table.
//!
//! Browser access is restricted to an exact allow-list of origins; see
//! [`api::cors`]. Health probes live at `GET /healthz` (plain `OK`) and at
//! `GET` on each app path (JSON), matching what the load balancer and
//! Route 53 expect.

pub mod api;
pub mod cli;
