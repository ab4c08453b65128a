fn main() {
    // Only the on-target demo links against ESP-IDF; host builds need nothing here.
    #[cfg(feature = "esp")]
    embuild::espidf::sysenv::output();
}
