pub mod api_user;
