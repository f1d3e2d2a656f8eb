fn main() {
    multiversx_sc_meta_lib::cli_main::<yield_source_mock::AbiProvider>();
}
