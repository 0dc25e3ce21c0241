mod budget;
mod category;
mod expense;
mod income;
mod user;
