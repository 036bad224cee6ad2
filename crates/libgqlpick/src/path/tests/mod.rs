mod path_segment_tests;
mod selected_fields_tests;
