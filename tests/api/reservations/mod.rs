mod delete;
mod search;
mod update;
