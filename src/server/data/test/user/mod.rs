use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UserChanges},
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod set_role;
mod update;
