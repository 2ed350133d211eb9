mod booking_flow_tests;
mod page_tests;
