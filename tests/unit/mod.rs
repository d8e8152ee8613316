mod logistics;
mod marketplace_filter;
mod router;
mod selector;
