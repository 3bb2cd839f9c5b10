//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic and
//! coordinates between repositories. The favorite service owns the multi-step
//! favorite operations, translating database constraint violations into the
//! conflict and not-found outcomes the API reports.

pub mod favorite;
