fn main() {
    // ESP-IDF link arguments only matter for the firmware binary; host
    // builds (tests, simulation) compile without the embuild dependency.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
