
mod lesson_flow_tests;
mod sync_channel_tests;
