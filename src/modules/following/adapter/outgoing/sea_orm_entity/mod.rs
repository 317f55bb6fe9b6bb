pub mod followings;
