//! Common Solidity fixtures for tests.

#![allow(dead_code)]

pub const OWNABLE: &str = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.0;

abstract contract Ownable {
    address public owner;

    event OwnershipTransferred(address indexed previous, address indexed next);

    modifier onlyOwner() {
        require(msg.sender == owner, "not owner");
        _;
    }

    function transferOwnership(address next) public onlyOwner {
        emit OwnershipTransferred(owner, next);
        owner = next;
    }
}
"#;

pub const SAFE_MATH: &str = r#"pragma solidity ^0.8.0;

library SafeMath {
    function add(uint a, uint b) internal pure returns (uint) {
        return a + b;
    }

    function sub(uint a, uint b) internal pure returns (uint) {
        return a - b;
    }

    function sum(uint[] storage values) internal view returns (uint total) {
        for (uint i = 0; i < values.length; i++) {
            total += values[i];
        }
    }
}
"#;

pub const IERC20: &str = r#"pragma solidity ^0.8.0;

interface IERC20 {
    function balanceOf(address account) external view returns (uint256);
    function transfer(address to, uint256 amount) external returns (bool);
}
"#;

/// Files a `Main.sol` under `/project/src` can import.
pub fn library_files() -> Vec<(&'static str, &'static str)> {
    vec![
        ("/project/src/access/Ownable.sol", OWNABLE),
        ("/project/src/math/SafeMath.sol", SAFE_MATH),
        ("/project/lib/token/src/IERC20.sol", IERC20),
    ]
}

/// Header importing every library file.
pub const IMPORTS: &str = r#"pragma solidity ^0.8.0;

import "./access/Ownable.sol";
import "./math/SafeMath.sol";
import "token/IERC20.sol";
"#;
