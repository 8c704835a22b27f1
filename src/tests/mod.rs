mod phonenumbervalidator_tests;
mod region_code;
