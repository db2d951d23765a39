pub mod application {
    pub mod cart {
        pub mod store;
    }
    pub mod order {
        pub mod get_detail;
        pub mod get_history;
        pub mod update_address;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod value_objects;
    }
    pub mod order {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod get_detail;
            pub mod get_history;
            pub mod update_address;
        }
    }
}
