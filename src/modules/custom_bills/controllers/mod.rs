pub mod custom_bill_controller;
