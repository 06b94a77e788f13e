mod click_tests;
mod map_page_tests;
mod reload_tests;
