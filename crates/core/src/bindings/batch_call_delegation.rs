use alloy::sol;

sol! {
    #[sol(rpc)]
    contract BatchCallDelegation {
        struct Call {
            bytes data;
            address to;
            uint256 value;
        }
        function execute(Call[] calldata calls) external payable;
    }
}
