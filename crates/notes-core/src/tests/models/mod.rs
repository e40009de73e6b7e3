mod account;
mod category;
mod note;
mod sort_order;
