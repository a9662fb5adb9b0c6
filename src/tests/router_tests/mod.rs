mod crawl_tests;
mod rooms_tests;
