
use ledger_test_utils::prelude::*;

use super::*;
