use alloy::sol;

sol! {
    #[sol(rpc)]
    contract Weth {
        function deposit() external payable;
        function approve(address guy, uint256 wad) external returns (bool);
    }
}
