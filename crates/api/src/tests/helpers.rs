// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use spinbook::SessionContext;
use spinbook_domain::Event;
use spinbook_persistence::Persistence;

use crate::{
    AuthenticationService, CreateEventRequest, LoginResponse, SignUpRequest,
    UpdateProfileRequest, create_event, sign_up, update_profile,
};

pub const TEST_PASSWORD: &str = "secret1";

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory()
        .expect("in-memory database")
        .with_password_cost(4)
}

pub fn create_sign_up_request(email: &str, role: &str) -> SignUpRequest {
    SignUpRequest {
        email: email.to_string(),
        password: String::from(TEST_PASSWORD),
        password_confirmation: String::from(TEST_PASSWORD),
        role: role.to_string(),
    }
}

/// Signs up an account and returns its session context.
pub fn sign_up_as(persistence: &mut Persistence, email: &str, role: &str) -> SessionContext {
    let response: LoginResponse =
        sign_up(persistence, &create_sign_up_request(email, role)).expect("sign up");
    AuthenticationService::validate_session(persistence, &response.session_token)
        .expect("fresh session is valid")
}

/// Signs up a DJ with a complete profile.
pub fn create_test_dj(
    persistence: &mut Persistence,
    email: &str,
    name: &str,
    genre: &str,
) -> SessionContext {
    let ctx: SessionContext = sign_up_as(persistence, email, "dj");
    update_profile(
        persistence,
        &ctx,
        &UpdateProfileRequest {
            name: Some(name.to_string()),
            genres: Some(vec![genre.to_string()]),
            cities: Some(vec![String::from("Austin, TX")]),
            ..UpdateProfileRequest::default()
        },
    )
    .expect("DJ profile update");
    ctx
}

/// Signs up a promoter with a complete profile.
pub fn create_test_promoter(persistence: &mut Persistence, email: &str) -> SessionContext {
    let ctx: SessionContext = sign_up_as(persistence, email, "promoter");
    update_profile(
        persistence,
        &ctx,
        &UpdateProfileRequest {
            org_name: Some(String::from("Warehouse Collective")),
            cities: Some(vec![String::from("Austin, TX")]),
            ..UpdateProfileRequest::default()
        },
    )
    .expect("promoter profile update");
    ctx
}

pub fn create_test_event_request(date: &str) -> CreateEventRequest {
    CreateEventRequest {
        name: String::from("Fourth Fest"),
        date: date.to_string(),
        venue: String::from("Dock 5"),
        city: Some(String::from("Austin, TX")),
        description: String::new(),
    }
}

pub fn create_test_event(
    persistence: &mut Persistence,
    promoter: &SessionContext,
    date: &str,
) -> Event {
    create_event(persistence, promoter, &create_test_event_request(date)).expect("create event")
}
