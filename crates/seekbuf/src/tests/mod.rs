mod arbitrary;

mod property_model;
