use crate::{
    model::profile::Profile,
    server::{
        data::administrator::AdministratorRepository,
        error::AppError,
        model::{
            administrator::{Administrator, NewAdministrator},
            page::Page,
        },
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod exists_with_profile;
mod list_page;
mod update;

fn new_administrator(email: &str, profile: Profile) -> NewAdministrator {
    NewAdministrator {
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        profile,
    }
}
